pub mod budget;
pub mod checklist;
pub mod itinerary;
pub mod overview;
