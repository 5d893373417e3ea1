//! The `Trip` holds one journey's schedule, budget, checklist and member
//! roster. The user can have multiple trips.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    activity::Activity,
    checklist::ChecklistItem,
    error::EngineError,
    expense::Expense,
    itinerary::Itinerary,
    stats::{self, BudgetSummary, CategoryFilter, ChecklistOverview},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Past,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripPrivacy {
    Public,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Organizer,
    Traveler,
}

impl MemberRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Organizer => "Trip Organizer",
            Self::Traveler => "Traveler",
        }
    }
}

/// A traveler on the roster.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripMember {
    pub id: Uuid,
    pub name: String,
    pub role: MemberRole,
}

impl TripMember {
    pub fn new(name: String, role: MemberRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            role,
        }
    }
}

/// Holds the itinerary, expenses, checklist and roster of one trip.
///
/// All collections live for the session only; commands mutate them in place
/// and the derived views are recomputed from the current state on demand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    pub destination: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub privacy: TripPrivacy,
    members: Vec<TripMember>,
    itinerary: Itinerary,
    expenses: Vec<Expense>,
    checklist: Vec<ChecklistItem>,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        destination: String,
        description: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: TripStatus,
        privacy: TripPrivacy,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            destination,
            description,
            start_date,
            end_date,
            status,
            privacy,
            members: Vec::new(),
            itinerary: Itinerary::new(),
            expenses: Vec::new(),
            checklist: Vec::new(),
        }
    }

    // --- roster ---

    pub fn members(&self) -> &[TripMember] {
        &self.members
    }

    pub fn add_member(&mut self, member: TripMember) {
        self.members.push(member);
    }

    // --- itinerary ---

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn add_activity(&mut self, activity: Activity) {
        self.itinerary.add(activity);
    }

    /// Moves one activity within `day`'s displayed sequence. See
    /// [`Itinerary::reorder`] for the exact contract.
    pub fn reorder_activity(&mut self, day: u32, from: usize, to: usize) -> Result<(), EngineError> {
        self.itinerary.reorder(day, from, to)
    }

    /// Removes an activity; absent ids are a silent no-op.
    pub fn remove_activity(&mut self, id: Uuid) {
        self.itinerary.remove(id);
    }

    // --- budget ---

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Removes an expense; absent ids are a silent no-op.
    pub fn remove_expense(&mut self, id: Uuid) {
        self.expenses.retain(|expense| expense.id != id);
    }

    pub fn budget(&self) -> BudgetSummary {
        stats::budget_summary(&self.expenses)
    }

    // --- checklist ---

    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    pub fn add_item(&mut self, item: ChecklistItem) {
        self.checklist.push(item);
    }

    /// Flips an item's completion flag; absent ids are a silent no-op.
    pub fn toggle_item(&mut self, id: Uuid) {
        if let Some(item) = self.checklist.iter_mut().find(|item| item.id == id) {
            item.toggle();
            tracing::debug!(%id, completed = item.completed, "checklist item toggled");
        }
    }

    /// Removes an item; absent ids are a silent no-op.
    pub fn remove_item(&mut self, id: Uuid) {
        self.checklist.retain(|item| item.id != id);
    }

    pub fn checklist_overview(&self) -> ChecklistOverview {
        stats::checklist_overview(&self.checklist)
    }

    pub fn checklist_filtered(&self, filter: &CategoryFilter) -> Vec<&ChecklistItem> {
        stats::filter_items(&self.checklist, filter)
    }
}
