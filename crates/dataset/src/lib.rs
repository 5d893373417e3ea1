//! Adapter between the external trip dataset and the planner engine.
//!
//! This crate is the single place that knows the external data format. It
//! deserializes the document through the [`records`] types, validates every
//! field through the engine constructors, and hands back a fully seeded
//! [`Planner`]. External ids (`"t1"`, `"a3"`) only exist inside this crate,
//! to resolve the flat record collections onto their trips during the load.

use std::collections::HashMap;

use thiserror::Error;

use engine::{
    Activity, ActivityCategory, ChecklistItem, EngineError, Expense, MemberRole, MoneyCents,
    Planner, Trip, TripMember, TripPrivacy, TripStatus, parse_clock,
};

pub mod records;

use records::{DatasetDoc, MemberRecord, TripRecord};

/// The built-in dataset the application starts from.
const SEED: &str = include_str!("../data/seed.json");

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record references unknown trip \"{0}\"")]
    UnknownTrip(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Loads the embedded seed dataset.
pub fn load_default() -> Result<Planner, DatasetError> {
    load_str(SEED)
}

/// Loads a dataset from a JSON document.
pub fn load_str(json: &str) -> Result<Planner, DatasetError> {
    let doc: DatasetDoc = serde_json::from_str(json)?;
    build_planner(doc)
}

fn build_planner(doc: DatasetDoc) -> Result<Planner, DatasetError> {
    let mut planner = Planner::new();
    // Source trip id -> engine trip id, for resolving the flat collections.
    let mut ids = HashMap::new();

    for record in doc.trips {
        let source_id = record.id.clone();
        let trip = convert_trip(record)?;
        ids.insert(source_id, planner.add_trip(trip));
    }

    for record in doc.itinerary {
        let trip_id = *ids
            .get(&record.trip_id)
            .ok_or_else(|| DatasetError::UnknownTrip(record.trip_id.clone()))?;
        let activity = Activity::new(
            record.day,
            parse_clock(&record.time)?,
            activity_category(&record.category)?,
            record.title,
            record.location,
            record.description,
        )?;
        planner.add_activity(trip_id, activity)?;
    }

    for record in doc.expenses {
        let trip_id = *ids
            .get(&record.trip_id)
            .ok_or_else(|| DatasetError::UnknownTrip(record.trip_id.clone()))?;
        let expense = Expense::new(
            record.category,
            record.description,
            record.paid_by,
            cents_from_decimal(record.amount)?,
        )?;
        planner.add_expense(trip_id, expense)?;
    }

    for record in doc.checklist {
        let trip_id = *ids
            .get(&record.trip_id)
            .ok_or_else(|| DatasetError::UnknownTrip(record.trip_id.clone()))?;
        let item = ChecklistItem::new(record.category, record.text, record.completed);
        planner.add_item(trip_id, item)?;
    }

    Ok(planner)
}

fn convert_trip(record: TripRecord) -> Result<Trip, DatasetError> {
    let status = match record.status.as_str() {
        "upcoming" => TripStatus::Upcoming,
        "past" => TripStatus::Past,
        other => {
            return Err(DatasetError::InvalidRecord(format!(
                "unknown trip status \"{other}\""
            )));
        }
    };
    let privacy = match record.privacy.as_str() {
        "public" => TripPrivacy::Public,
        "private" => TripPrivacy::Private,
        other => {
            return Err(DatasetError::InvalidRecord(format!(
                "unknown trip privacy \"{other}\""
            )));
        }
    };

    let mut trip = Trip::new(
        record.name,
        record.destination,
        record.description,
        record.start_date,
        record.end_date,
        status,
        privacy,
    );
    for member in record.members {
        trip.add_member(convert_member(member));
    }
    Ok(trip)
}

fn convert_member(record: MemberRecord) -> TripMember {
    // The source marks organizers as "admin"; everything else (including a
    // missing role) is a plain traveler.
    let role = match record.role.as_deref() {
        Some("admin") | Some("organizer") => MemberRole::Organizer,
        _ => MemberRole::Traveler,
    };
    TripMember::new(record.name, role)
}

fn activity_category(value: &str) -> Result<ActivityCategory, DatasetError> {
    match value {
        "activity" => Ok(ActivityCategory::Activity),
        "transportation" => Ok(ActivityCategory::Transportation),
        "accommodation" => Ok(ActivityCategory::Accommodation),
        "food" => Ok(ActivityCategory::Food),
        other => Err(DatasetError::InvalidRecord(format!(
            "unknown activity category \"{other}\""
        ))),
    }
}

/// Converts a decimal currency amount into cents.
///
/// The only place floating point touches money: the external format stores
/// decimal numbers, so they are rounded to cents exactly once, here.
fn cents_from_decimal(amount: f64) -> Result<MoneyCents, DatasetError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DatasetError::InvalidRecord(format!(
            "invalid expense amount {amount}"
        )));
    }
    Ok(MoneyCents::new((amount * 100.0).round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_dataset_loads() {
        let planner = load_default().unwrap();

        assert_eq!(planner.stats().total, 2);
        assert_eq!(planner.stats().upcoming, 1);

        let trip = planner.trip_by_name("Bali Adventure").unwrap();
        assert_eq!(trip.itinerary().days(), vec![1, 2, 3]);
        assert!(!trip.expenses().is_empty());
        assert!(!trip.checklist().is_empty());
        assert!(trip.members().iter().any(|m| m.role == MemberRole::Organizer));
    }

    #[test]
    fn camel_case_and_drifted_keys_are_accepted() {
        let json = r#"{
            "trips": [{
                "id": "t1",
                "name": "Weekend",
                "destination": "Porto",
                "startDate": "2026-09-04",
                "endDate": "2026-09-06",
                "status": "upcoming",
                "privacy": "public",
                "members": [
                    {"id": "m1", "userName": "Ana", "role": "admin"},
                    {"id": "m2", "username": "Rui"}
                ]
            }],
            "expenses": [{
                "id": "e1",
                "tripId": "t1",
                "category": "Food",
                "paidBy": "Ana",
                "amount": 12.5
            }]
        }"#;

        let planner = load_str(json).unwrap();
        let trip = planner.trip_by_name("Weekend").unwrap();

        assert_eq!(trip.members()[0].name, "Ana");
        assert_eq!(trip.members()[0].role, MemberRole::Organizer);
        assert_eq!(trip.members()[1].name, "Rui");
        assert_eq!(trip.members()[1].role, MemberRole::Traveler);
        assert_eq!(trip.budget().total, MoneyCents::new(12_50));
    }

    #[test]
    fn records_for_unknown_trips_are_rejected() {
        let json = r#"{
            "trips": [],
            "checklist": [
                {"id": "c1", "tripId": "ghost", "category": "gear", "text": "Tent"}
            ]
        }"#;

        let err = load_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::UnknownTrip(id) if id == "ghost"));
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        assert!(cents_from_decimal(-1.0).is_err());
        assert!(cents_from_decimal(f64::NAN).is_err());
        assert_eq!(cents_from_decimal(12.5).unwrap(), MoneyCents::new(1250));
        assert_eq!(cents_from_decimal(0.1).unwrap(), MoneyCents::new(10));
    }

    #[test]
    fn unknown_enums_are_rejected() {
        assert!(activity_category("sightseeing").is_err());

        let json = r#"{
            "trips": [{
                "id": "t1",
                "name": "X",
                "destination": "Y",
                "startDate": "2026-01-01",
                "endDate": "2026-01-02",
                "status": "draft",
                "privacy": "public"
            }]
        }"#;
        assert!(matches!(
            load_str(json).unwrap_err(),
            DatasetError::InvalidRecord(_)
        ));
    }
}
