//! Packing checklist items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the packing checklist.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub category: String,
    pub text: String,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(category: String, text: String, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            text,
            completed,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
