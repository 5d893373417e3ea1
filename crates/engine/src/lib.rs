use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use activity::{Activity, ActivityCategory, parse_clock};
pub use checklist::ChecklistItem;
pub use error::EngineError;
pub use expense::Expense;
pub use itinerary::Itinerary;
pub use money::MoneyCents;
pub use stats::{
    BudgetSummary, CategoryCount, CategoryFilter, CategoryTotal, ChecklistOverview, budget_summary,
    checklist_overview, filter_items,
};
pub use trip::{MemberRole, Trip, TripMember, TripPrivacy, TripStatus};

mod activity;
mod checklist;
mod error;
mod expense;
mod itinerary;
mod money;
mod stats;
mod trip;

type ResultEngine<T> = Result<T, EngineError>;

/// Trip counts for the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerStats {
    pub total: usize,
    pub upcoming: usize,
    pub past: usize,
}

/// The entity store: owns every trip of the session.
///
/// The planner is passed by reference to whoever needs it; there is no
/// global state. All commands are synchronous and run to completion, so
/// each one observes the fully applied result of the previous one.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    trips: Vec<Trip>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trip and returns its id.
    pub fn add_trip(&mut self, trip: Trip) -> Uuid {
        let id = trip.id;
        tracing::debug!(%id, name = %trip.name, "trip added");
        self.trips.push(trip);
        id
    }

    /// All trips, in insertion order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns a [`Trip`].
    pub fn trip(&self, trip_id: Uuid) -> ResultEngine<&Trip> {
        self.trips
            .iter()
            .find(|trip| trip.id == trip_id)
            .ok_or_else(|| EngineError::KeyNotFound(trip_id.to_string()))
    }

    fn trip_mut(&mut self, trip_id: Uuid) -> ResultEngine<&mut Trip> {
        self.trips
            .iter_mut()
            .find(|trip| trip.id == trip_id)
            .ok_or_else(|| EngineError::KeyNotFound(trip_id.to_string()))
    }

    /// Looks a trip up by name, for configuration-driven preselection.
    pub fn trip_by_name(&self, name: &str) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.name == name)
    }

    // --- commands ---
    //
    // Each command resolves the trip first (unknown trip ids are a caller
    // bug and surface as KeyNotFound), then delegates. Entity-level ids
    // follow the silent no-op policy of the trip methods.

    pub fn add_activity(&mut self, trip_id: Uuid, activity: Activity) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.add_activity(activity);
        Ok(())
    }

    pub fn reorder_activity(
        &mut self,
        trip_id: Uuid,
        day: u32,
        from: usize,
        to: usize,
    ) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.reorder_activity(day, from, to)
    }

    pub fn remove_activity(&mut self, trip_id: Uuid, id: Uuid) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.remove_activity(id);
        Ok(())
    }

    pub fn add_expense(&mut self, trip_id: Uuid, expense: Expense) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.add_expense(expense);
        Ok(())
    }

    pub fn remove_expense(&mut self, trip_id: Uuid, id: Uuid) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.remove_expense(id);
        Ok(())
    }

    pub fn add_item(&mut self, trip_id: Uuid, item: ChecklistItem) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.add_item(item);
        Ok(())
    }

    pub fn toggle_item(&mut self, trip_id: Uuid, id: Uuid) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.toggle_item(id);
        Ok(())
    }

    pub fn remove_item(&mut self, trip_id: Uuid, id: Uuid) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.remove_item(id);
        Ok(())
    }

    pub fn add_member(&mut self, trip_id: Uuid, member: TripMember) -> ResultEngine<()> {
        self.trip_mut(trip_id)?.add_member(member);
        Ok(())
    }

    // --- dashboard ---

    pub fn stats(&self) -> PlannerStats {
        self.trips
            .iter()
            .fold(PlannerStats::default(), |mut stats, trip| {
                stats.total += 1;
                match trip.status {
                    TripStatus::Upcoming => stats.upcoming += 1,
                    TripStatus::Past => stats.past += 1,
                }
                stats
            })
    }

    /// The trip with the latest start date.
    pub fn recent_trip(&self) -> Option<&Trip> {
        self.trips.iter().max_by_key(|trip| trip.start_date)
    }
}
