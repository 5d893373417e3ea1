use chrono::NaiveDate;
use uuid::Uuid;

use engine::{
    EngineError, MemberRole, Planner, Trip, TripMember, TripPrivacy, TripStatus,
};

fn trip(name: &str, start: NaiveDate, status: TripStatus) -> Trip {
    Trip::new(
        name.to_string(),
        format!("{name} somewhere"),
        String::new(),
        start,
        start + chrono::Days::new(7),
        status,
        TripPrivacy::Private,
    )
}

#[test]
fn stats_count_trips_by_status() {
    let mut planner = Planner::new();
    planner.add_trip(trip(
        "Alps",
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        TripStatus::Upcoming,
    ));
    planner.add_trip(trip(
        "Coast",
        NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        TripStatus::Upcoming,
    ));
    planner.add_trip(trip(
        "Desert",
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        TripStatus::Past,
    ));

    let stats = planner.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.upcoming, 2);
    assert_eq!(stats.past, 1);
}

#[test]
fn empty_planner_has_zero_stats_and_no_recent_trip() {
    let planner = Planner::new();
    assert_eq!(planner.stats().total, 0);
    assert!(planner.recent_trip().is_none());
}

#[test]
fn recent_trip_has_the_latest_start_date() {
    let mut planner = Planner::new();
    planner.add_trip(trip(
        "Older",
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        TripStatus::Past,
    ));
    planner.add_trip(trip(
        "Newest",
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        TripStatus::Upcoming,
    ));
    planner.add_trip(trip(
        "Middle",
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        TripStatus::Upcoming,
    ));

    assert_eq!(planner.recent_trip().unwrap().name, "Newest");
}

#[test]
fn members_join_the_roster() {
    let mut planner = Planner::new();
    let trip_id = planner.add_trip(trip(
        "Alps",
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        TripStatus::Upcoming,
    ));

    planner
        .add_member(
            trip_id,
            TripMember::new("Ana".to_string(), MemberRole::Organizer),
        )
        .unwrap();
    planner
        .add_member(
            trip_id,
            TripMember::new("Rui".to_string(), MemberRole::Traveler),
        )
        .unwrap();

    let members = planner.trip(trip_id).unwrap().members();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].role.label(), "Trip Organizer");
    assert_eq!(members[1].role.label(), "Traveler");
}

#[test]
fn unknown_trip_ids_are_rejected() {
    let planner = Planner::new();
    let err = planner.trip(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[test]
fn trips_are_found_by_name() {
    let mut planner = Planner::new();
    planner.add_trip(trip(
        "Coast",
        NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        TripStatus::Upcoming,
    ));

    assert!(planner.trip_by_name("Coast").is_some());
    assert!(planner.trip_by_name("Nowhere").is_none());
}
