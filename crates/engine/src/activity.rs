//! A single scheduled itinerary entry belonging to one day of a trip.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// Classification of an itinerary entry.
///
/// Unlike expense and checklist categories, which are free-form labels, the
/// itinerary works with a closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Activity,
    Transportation,
    Accommodation,
    Food,
}

impl ActivityCategory {
    /// Returns the label shown next to an itinerary entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Transportation => "transportation",
            Self::Accommodation => "accommodation",
            Self::Food => "food",
        }
    }
}

/// A scheduled activity.
///
/// `day` is a 1-based index into the trip; the set of days is derived from
/// the activity collection itself, so an activity always belongs to the
/// derived day set. `time` is a plain clock time: scheduling is naive by
/// design, there is no timezone handling in the planner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub day: u32,
    pub time: NaiveTime,
    pub category: ActivityCategory,
    pub title: String,
    pub location: String,
    pub description: String,
}

impl Activity {
    pub fn new(
        day: u32,
        time: NaiveTime,
        category: ActivityCategory,
        title: String,
        location: String,
        description: String,
    ) -> Result<Self, EngineError> {
        if day == 0 {
            return Err(EngineError::InvalidDay("day must be >= 1".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            day,
            time,
            category,
            title,
            location,
            description,
        })
    }
}

/// Parses an `HH:MM` clock string.
///
/// This is the single entry point for clock parsing: both the dataset
/// adapter and the UI go through it, so "09:00" means the same thing
/// everywhere.
pub fn parse_clock(value: &str) -> Result<NaiveTime, EngineError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| EngineError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_day_zero() {
        let result = Activity::new(
            0,
            parse_clock("09:00").unwrap(),
            ActivityCategory::Food,
            "Breakfast".to_string(),
            String::new(),
            String::new(),
        );
        assert_eq!(
            result.unwrap_err(),
            EngineError::InvalidDay("day must be >= 1".to_string())
        );
    }

    #[test]
    fn parse_clock_accepts_hh_mm_only() {
        assert!(parse_clock("09:00").is_ok());
        assert!(parse_clock(" 23:59 ").is_ok());
        assert!(parse_clock("9am").is_err());
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("").is_err());
    }
}
