use chrono::NaiveDate;
use uuid::Uuid;

use engine::{
    Activity, ActivityCategory, ChecklistItem, EngineError, Planner, Trip, TripPrivacy, TripStatus,
    parse_clock,
};

fn empty_trip() -> Trip {
    Trip::new(
        "Kyoto".to_string(),
        "Kyoto, Japan".to_string(),
        "Temples and food".to_string(),
        NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
        NaiveDate::from_ymd_opt(2026, 4, 17).unwrap(),
        TripStatus::Upcoming,
        TripPrivacy::Private,
    )
}

fn activity(day: u32, time: &str, title: &str) -> Activity {
    Activity::new(
        day,
        parse_clock(time).unwrap(),
        ActivityCategory::Activity,
        title.to_string(),
        "somewhere".to_string(),
        String::new(),
    )
    .unwrap()
}

/// The concrete scheduling scenario: three day-1 activities inserted out of
/// clock order.
fn planner_with_day1() -> (Planner, Uuid, [Uuid; 3]) {
    let mut planner = Planner::new();
    let trip_id = planner.add_trip(empty_trip());

    let a1 = activity(1, "09:00", "a1");
    let a2 = activity(1, "10:00", "a2");
    let a3 = activity(1, "08:00", "a3");
    let ids = [a1.id, a2.id, a3.id];

    planner.add_activity(trip_id, a1).unwrap();
    planner.add_activity(trip_id, a2).unwrap();
    planner.add_activity(trip_id, a3).unwrap();

    (planner, trip_id, ids)
}

fn day_ids(planner: &Planner, trip_id: Uuid, day: u32) -> Vec<Uuid> {
    planner
        .trip(trip_id)
        .unwrap()
        .itinerary()
        .for_day(day)
        .iter()
        .map(|activity| activity.id)
        .collect()
}

#[test]
fn partition_is_sorted_and_deduplicated() {
    let mut planner = Planner::new();
    let trip_id = planner.add_trip(empty_trip());

    for (day, time) in [(3, "10:00"), (1, "09:00"), (3, "08:00"), (2, "12:00")] {
        planner
            .add_activity(trip_id, activity(day, time, "x"))
            .unwrap();
    }

    let days = planner.trip(trip_id).unwrap().itinerary().days();
    assert_eq!(days, vec![1, 2, 3]);
}

#[test]
fn partition_of_empty_collection_is_empty() {
    let mut planner = Planner::new();
    let trip_id = planner.add_trip(empty_trip());

    assert!(planner.trip(trip_id).unwrap().itinerary().days().is_empty());
}

#[test]
fn every_day_appears_exactly_once() {
    let (planner, trip_id, _) = planner_with_day1();

    let trip = planner.trip(trip_id).unwrap();
    let days = trip.itinerary().days();
    for activity in trip.itinerary().activities() {
        assert_eq!(days.iter().filter(|day| **day == activity.day).count(), 1);
    }
}

#[test]
fn default_day_view_is_time_sorted() {
    let (planner, trip_id, [a1, a2, a3]) = planner_with_day1();

    assert_eq!(day_ids(&planner, trip_id, 1), vec![a3, a1, a2]);
}

#[test]
fn reorder_moves_within_the_displayed_sequence() {
    let (mut planner, trip_id, [a1, a2, a3]) = planner_with_day1();

    // Move a3 from the front of the time-sorted view to the end.
    planner.reorder_activity(trip_id, 1, 0, 2).unwrap();

    assert_eq!(day_ids(&planner, trip_id, 1), vec![a1, a2, a3]);
}

#[test]
fn reorder_survives_unrelated_mutations() {
    let (mut planner, trip_id, [a1, a2, a3]) = planner_with_day1();
    planner.reorder_activity(trip_id, 1, 0, 2).unwrap();

    let item = ChecklistItem::new("documents".to_string(), "Passport".to_string(), false);
    let item_id = item.id;
    planner.add_item(trip_id, item).unwrap();
    planner.toggle_item(trip_id, item_id).unwrap();

    // Re-deriving the view must reflect the manual order, not a fresh
    // time sort.
    assert_eq!(day_ids(&planner, trip_id, 1), vec![a1, a2, a3]);
}

#[test]
fn reorder_preserves_count_and_id_set() {
    let (mut planner, trip_id, mut ids) = planner_with_day1();
    planner
        .add_activity(trip_id, activity(2, "09:30", "other day"))
        .unwrap();

    planner.reorder_activity(trip_id, 1, 2, 0).unwrap();

    let trip = planner.trip(trip_id).unwrap();
    assert_eq!(trip.itinerary().len(), 4);

    let mut after = day_ids(&planner, trip_id, 1);
    after.sort();
    ids.sort();
    assert_eq!(after, ids);
}

#[test]
fn reorder_leaves_other_days_untouched() {
    let (mut planner, trip_id, _) = planner_with_day1();
    let b1 = activity(2, "11:00", "b1");
    let b2 = activity(2, "09:30", "b2");
    let (b1_id, b2_id) = (b1.id, b2.id);
    planner.add_activity(trip_id, b1).unwrap();
    planner.add_activity(trip_id, b2).unwrap();

    let day1_before = day_ids(&planner, trip_id, 1);
    planner.reorder_activity(trip_id, 2, 0, 1).unwrap();

    assert_eq!(day_ids(&planner, trip_id, 1), day1_before);
    assert_eq!(day_ids(&planner, trip_id, 2), vec![b1_id, b2_id]);
}

#[test]
fn reorder_same_index_is_a_noop() {
    let (mut planner, trip_id, _) = planner_with_day1();
    let before = day_ids(&planner, trip_id, 1);

    planner.reorder_activity(trip_id, 1, 1, 1).unwrap();

    assert_eq!(day_ids(&planner, trip_id, 1), before);
    assert!(
        !planner
            .trip(trip_id)
            .unwrap()
            .itinerary()
            .is_manually_ordered(1)
    );
}

#[test]
fn reorder_rejects_out_of_range_indices_without_mutating() {
    let (mut planner, trip_id, _) = planner_with_day1();
    let before = day_ids(&planner, trip_id, 1);

    let err = planner.reorder_activity(trip_id, 1, 0, 3).unwrap_err();
    assert!(matches!(err, EngineError::InvalidIndex(_)));
    let err = planner.reorder_activity(trip_id, 5, 0, 0).unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));

    assert_eq!(day_ids(&planner, trip_id, 1), before);
    assert!(
        !planner
            .trip(trip_id)
            .unwrap()
            .itinerary()
            .is_manually_ordered(1)
    );
}

#[test]
fn reorder_on_unknown_trip_fails() {
    let (mut planner, _, _) = planner_with_day1();

    let err = planner
        .reorder_activity(Uuid::new_v4(), 1, 0, 1)
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[test]
fn delete_is_idempotent() {
    let (mut planner, trip_id, [a1, a2, a3]) = planner_with_day1();

    planner.remove_activity(trip_id, a2).unwrap();
    let after_once = day_ids(&planner, trip_id, 1);

    planner.remove_activity(trip_id, a2).unwrap();
    assert_eq!(day_ids(&planner, trip_id, 1), after_once);
    assert_eq!(after_once, vec![a3, a1]);
}

#[test]
fn delete_keeps_the_rest_of_a_manual_order() {
    let (mut planner, trip_id, [a1, a2, a3]) = planner_with_day1();
    planner.reorder_activity(trip_id, 1, 0, 2).unwrap();

    // [a1, a2, a3] -> delete a2 -> [a1, a3], still manual.
    planner.remove_activity(trip_id, a2).unwrap();

    assert_eq!(day_ids(&planner, trip_id, 1), vec![a1, a3]);
    assert!(
        planner
            .trip(trip_id)
            .unwrap()
            .itinerary()
            .is_manually_ordered(1)
    );
}

#[test]
fn deleting_a_whole_day_drops_it_from_the_partition() {
    let (mut planner, trip_id, [a1, a2, a3]) = planner_with_day1();
    planner.reorder_activity(trip_id, 1, 0, 2).unwrap();

    for id in [a1, a2, a3] {
        planner.remove_activity(trip_id, id).unwrap();
    }

    let trip = planner.trip(trip_id).unwrap();
    assert!(trip.itinerary().days().is_empty());
    assert!(!trip.itinerary().is_manually_ordered(1));
}

#[test]
fn adding_into_an_ordered_day_appends_to_the_order() {
    let (mut planner, trip_id, [a1, a2, a3]) = planner_with_day1();
    planner.reorder_activity(trip_id, 1, 0, 2).unwrap();

    // Earlier than everything else; a time sort would put it first.
    let early = activity(1, "06:00", "sunrise");
    let early_id = early.id;
    planner.add_activity(trip_id, early).unwrap();

    assert_eq!(day_ids(&planner, trip_id, 1), vec![a1, a2, a3, early_id]);
}
