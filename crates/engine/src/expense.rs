//! A shared expense recorded against the trip budget.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::EngineError, money::MoneyCents};

/// A single expense.
///
/// Expenses are an independent flat collection: nothing ties them to
/// itinerary entries. `category` is a free-form label used only for
/// grouping in the budget breakdown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub paid_by: String,
    pub amount: MoneyCents,
}

impl Expense {
    /// Creates a new expense. The amount must be non-negative.
    pub fn new(
        category: String,
        description: String,
        paid_by: String,
        amount: MoneyCents,
    ) -> Result<Self, EngineError> {
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "expense amount must be >= 0, got {amount}"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            category,
            description,
            paid_by,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_amount() {
        let result = Expense::new(
            "Food".to_string(),
            "Dinner".to_string(),
            "Sarah".to_string(),
            MoneyCents::new(-100),
        );
        assert!(matches!(result, Err(EngineError::InvalidAmount(_))));
    }
}
