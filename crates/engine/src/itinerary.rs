//! Day partitioning and manual ordering of scheduled activities.
//!
//! The itinerary owns the flat activity collection together with the per-day
//! manual orders. A day starts out *unordered*: its view is derived by
//! sorting on clock time. The first effective [`reorder`] persists the full
//! id sequence for that day, and from then on the stored order wins over the
//! time sort. The transition is one-way; a day never falls back to the
//! derived sort on its own.
//!
//! [`reorder`]: Itinerary::reorder

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{activity::Activity, error::EngineError};

/// The schedule of one trip.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Itinerary {
    activities: Vec<Activity>,
    manual_orders: HashMap<u32, Vec<Uuid>>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    /// All activities, in backing-collection order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// The derived day partition: distinct `day` values, ascending, no
    /// duplicates. Empty input yields an empty sequence.
    pub fn days(&self) -> Vec<u32> {
        let mut days: Vec<u32> = self.activities.iter().map(|activity| activity.day).collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// Returns `true` once `day` has been manually reordered.
    pub fn is_manually_ordered(&self, day: u32) -> bool {
        self.manual_orders.contains_key(&day)
    }

    /// The ordered view of one day.
    ///
    /// Uses the persisted manual order when the day has one; otherwise the
    /// day's activities sorted by time, ascending. The sort is stable, so
    /// entries sharing a clock time keep their backing order.
    pub fn for_day(&self, day: u32) -> Vec<&Activity> {
        if let Some(order) = self.manual_orders.get(&day) {
            order
                .iter()
                .filter_map(|id| self.activities.iter().find(|activity| activity.id == *id))
                .collect()
        } else {
            let mut items: Vec<&Activity> = self
                .activities
                .iter()
                .filter(|activity| activity.day == day)
                .collect();
            items.sort_by_key(|activity| activity.time);
            items
        }
    }

    /// Moves the activity at `from` to position `to` within `day`'s ordered
    /// view and persists the resulting sequence as the day's manual order.
    ///
    /// `from == to` is accepted as a no-op and does not persist anything.
    /// Out-of-range indices are rejected without touching any state; other
    /// days are never affected.
    pub fn reorder(&mut self, day: u32, from: usize, to: usize) -> Result<(), EngineError> {
        let mut order: Vec<Uuid> = self
            .for_day(day)
            .iter()
            .map(|activity| activity.id)
            .collect();

        if order.is_empty() {
            return Err(EngineError::KeyNotFound(format!("day {day}")));
        }

        let len = order.len();
        if from >= len || to >= len {
            return Err(EngineError::InvalidIndex(format!(
                "move {from} -> {to} outside day {day} (len {len})"
            )));
        }

        if from == to {
            return Ok(());
        }

        let id = order.remove(from);
        order.insert(to, id);
        self.manual_orders.insert(day, order);

        tracing::debug!(day, from, to, "activity reordered");
        Ok(())
    }

    /// Adds an activity to the schedule.
    ///
    /// If the target day is already manually ordered, the new id is appended
    /// to that order so the stored sequence stays a complete permutation of
    /// the day.
    pub fn add(&mut self, activity: Activity) {
        if let Some(order) = self.manual_orders.get_mut(&activity.day) {
            order.push(activity.id);
        }
        self.activities.push(activity);
    }

    /// Removes an activity by id, along with its entry in any manual order.
    ///
    /// Absent ids are a silent no-op, so deletion is idempotent. An order
    /// emptied by the removal is dropped together with the day itself.
    pub fn remove(&mut self, id: Uuid) {
        let Some(index) = self
            .activities
            .iter()
            .position(|activity| activity.id == id)
        else {
            return;
        };

        let day = self.activities[index].day;
        self.activities.remove(index);

        if let Some(order) = self.manual_orders.get_mut(&day) {
            order.retain(|entry| *entry != id);
            if order.is_empty() {
                self.manual_orders.remove(&day);
            }
        }

        tracing::debug!(%id, day, "activity removed");
    }
}
