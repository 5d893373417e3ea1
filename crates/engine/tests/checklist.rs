use chrono::NaiveDate;
use uuid::Uuid;

use engine::{
    CategoryFilter, ChecklistItem, Planner, Trip, TripPrivacy, TripStatus, checklist_overview,
    filter_items,
};

fn empty_trip() -> Trip {
    Trip::new(
        "Patagonia".to_string(),
        "El Chaltén, Argentina".to_string(),
        String::new(),
        NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
        NaiveDate::from_ymd_opt(2025, 11, 16).unwrap(),
        TripStatus::Past,
        TripPrivacy::Private,
    )
}

fn item(category: &str, text: &str, completed: bool) -> ChecklistItem {
    ChecklistItem::new(category.to_string(), text.to_string(), completed)
}

#[test]
fn one_of_four_completed_is_25_percent() {
    let items = [
        item("clothing", "Rain jacket", true),
        item("clothing", "Hiking boots", false),
        item("documents", "Passport", false),
        item("gear", "Headlamp", false),
    ];

    let overview = checklist_overview(&items);
    assert_eq!(overview.completed, 1);
    assert_eq!(overview.total, 4);
    assert_eq!(overview.progress, 25);
}

#[test]
fn deleting_open_items_then_completing_the_rest_reaches_100() {
    let mut planner = Planner::new();
    let trip_id = planner.add_trip(empty_trip());

    let kept = item("documents", "Passport", true);
    let kept_id = kept.id;
    let open: Vec<ChecklistItem> = (0..3)
        .map(|i| item("gear", &format!("item {i}"), false))
        .collect();
    let open_ids: Vec<Uuid> = open.iter().map(|item| item.id).collect();

    planner.add_item(trip_id, kept).unwrap();
    for entry in open {
        planner.add_item(trip_id, entry).unwrap();
    }

    for id in open_ids {
        planner.remove_item(trip_id, id).unwrap();
    }
    // The kept item was already completed; toggling flips it off and back.
    planner.toggle_item(trip_id, kept_id).unwrap();
    planner.toggle_item(trip_id, kept_id).unwrap();

    let overview = planner.trip(trip_id).unwrap().checklist_overview();
    assert_eq!(overview.total, 1);
    assert_eq!(overview.progress, 100);
}

#[test]
fn empty_checklist_is_zero_percent() {
    let overview = checklist_overview(&[]);
    assert_eq!(overview.total, 0);
    assert_eq!(overview.progress, 0);
}

#[test]
fn all_completed_is_100_percent() {
    let items = [
        item("clothing", "Socks", true),
        item("clothing", "Hat", true),
    ];
    assert_eq!(checklist_overview(&items).progress, 100);
}

#[test]
fn progress_is_rounded_to_the_nearest_integer() {
    // 1/3 -> 33, 2/3 -> 67
    let mut items = vec![
        item("gear", "a", true),
        item("gear", "b", false),
        item("gear", "c", false),
    ];
    assert_eq!(checklist_overview(&items).progress, 33);

    items[1].toggle();
    assert_eq!(checklist_overview(&items).progress, 67);
}

#[test]
fn category_counts_keep_first_seen_order() {
    let items = [
        item("toiletries", "Toothbrush", false),
        item("clothing", "Jacket", false),
        item("toiletries", "Sunscreen", true),
    ];

    let overview = checklist_overview(&items);
    let counts: Vec<(&str, usize)> = overview
        .categories
        .iter()
        .map(|entry| (entry.name.as_str(), entry.count))
        .collect();
    assert_eq!(counts, [("toiletries", 2), ("clothing", 1)]);
}

#[test]
fn filter_selects_the_matching_subsequence() {
    let items = [
        item("clothing", "Jacket", false),
        item("documents", "Visa", true),
        item("clothing", "Boots", false),
    ];

    let all = filter_items(&items, &CategoryFilter::parse("all"));
    assert_eq!(all.len(), 3);

    let clothing = filter_items(&items, &CategoryFilter::parse("clothing"));
    let texts: Vec<&str> = clothing.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, ["Jacket", "Boots"]);

    let none = filter_items(&items, &CategoryFilter::parse("snacks"));
    assert!(none.is_empty());
}

#[test]
fn progress_ignores_the_active_filter() {
    // The ratio is defined over the entire collection, not the filtered
    // subset the user happens to be looking at.
    let items = [
        item("clothing", "Jacket", true),
        item("documents", "Visa", false),
        item("documents", "Insurance", false),
        item("documents", "Tickets", false),
    ];

    let filtered = filter_items(&items, &CategoryFilter::parse("clothing"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(checklist_overview(&items).progress, 25);
}

#[test]
fn toggling_an_unknown_id_is_a_silent_noop() {
    let mut planner = Planner::new();
    let trip_id = planner.add_trip(empty_trip());
    planner
        .add_item(trip_id, item("gear", "Tent", false))
        .unwrap();

    planner.toggle_item(trip_id, Uuid::new_v4()).unwrap();

    let overview = planner.trip(trip_id).unwrap().checklist_overview();
    assert_eq!(overview.completed, 0);
}
