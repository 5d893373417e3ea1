//! Record shapes of the external trip dataset.
//!
//! These mirror the source document as-is, including its loose spots: flat
//! collections tagged with a `tripId`, camelCase keys, and fields whose name
//! drifted between variants (`userName` vs `username`). The aliases absorb
//! all of that here so nothing outside this crate ever sees the external
//! shape.

use chrono::NaiveDate;
use serde::Deserialize;

/// The whole dataset document.
#[derive(Debug, Deserialize)]
pub struct DatasetDoc {
    pub trips: Vec<TripRecord>,
    #[serde(default)]
    pub itinerary: Vec<ActivityRecord>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub checklist: Vec<ChecklistRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TripRecord {
    pub id: String,
    pub name: String,
    pub destination: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "startDate")]
    pub start_date: NaiveDate,
    #[serde(alias = "endDate")]
    pub end_date: NaiveDate,
    pub status: String,
    pub privacy: String,
    /// Cover image URL; the terminal client has no use for it but the
    /// source format carries one.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

#[derive(Debug, Deserialize)]
pub struct MemberRecord {
    pub id: String,
    /// The source is inconsistent here: trip members use `name`, comment
    /// authors used `userName` and at least one variant `username`.
    #[serde(alias = "userName", alias = "username")]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(alias = "tripId")]
    pub trip_id: String,
    pub day: u32,
    /// `HH:MM` clock string.
    pub time: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    #[serde(alias = "tripId")]
    pub trip_id: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "paidBy")]
    pub paid_by: String,
    /// Decimal amount in whole currency units (e.g. `50` or `12.5`).
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct ChecklistRecord {
    pub id: String,
    #[serde(alias = "tripId")]
    pub trip_id: String,
    pub category: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}
