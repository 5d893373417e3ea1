//! Derived views over the flat entity collections.
//!
//! Everything in this module is a pure derivation: the functions take the
//! current collections and return summary values for the UI. Category
//! ordering is always first-seen order so charts and legends stay stable
//! across refreshes.

use serde::{Deserialize, Serialize};

use crate::{checklist::ChecklistItem, expense::Expense, money::MoneyCents};

/// One slice of the budget breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: MoneyCents,
}

/// Budget totals grouped by expense category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Per-category totals, in the order categories first appear.
    pub categories: Vec<CategoryTotal>,
    /// Sum over all expenses; always equals the sum of `categories`.
    pub total: MoneyCents,
}

/// Groups expense amounts by category and computes the grand total.
///
/// The empty collection yields an empty breakdown and a zero total.
pub fn budget_summary(expenses: &[Expense]) -> BudgetSummary {
    let mut summary = BudgetSummary::default();

    for expense in expenses {
        match summary
            .categories
            .iter_mut()
            .find(|slice| slice.name == expense.category)
        {
            Some(slice) => slice.amount += expense.amount,
            None => summary.categories.push(CategoryTotal {
                name: expense.category.clone(),
                amount: expense.amount,
            }),
        }
        summary.total += expense.amount;
    }

    summary
}

/// Item count for one checklist category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Checklist completion state for the progress bar and category selector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistOverview {
    /// Per-category item counts, in first-seen order.
    pub categories: Vec<CategoryCount>,
    pub completed: usize,
    pub total: usize,
    /// Completion over the whole collection, rounded to a percentage.
    /// Defined as 0 for an empty checklist.
    pub progress: u8,
}

/// Computes category counts and the completion ratio over the **entire**
/// collection; an active category filter never changes the percentage.
pub fn checklist_overview(items: &[ChecklistItem]) -> ChecklistOverview {
    let mut overview = ChecklistOverview {
        total: items.len(),
        ..Default::default()
    };

    for item in items {
        match overview
            .categories
            .iter_mut()
            .find(|entry| entry.name == item.category)
        {
            Some(entry) => entry.count += 1,
            None => overview.categories.push(CategoryCount {
                name: item.category.clone(),
                count: 1,
            }),
        }
        if item.completed {
            overview.completed += 1;
        }
    }

    overview.progress = if overview.total == 0 {
        0
    } else {
        ((overview.completed as f64 / overview.total as f64) * 100.0).round() as u8
    };

    overview
}

/// Category selection for the checklist view.
///
/// `All` is the `"all"` sentinel of the category selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parses a selector value; `"all"` is the show-everything sentinel.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn matches(&self, item: &ChecklistItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => item.category == *name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(name) => name,
        }
    }
}

/// The filtered checklist subsequence, keeping collection order.
pub fn filter_items<'a>(
    items: &'a [ChecklistItem],
    filter: &CategoryFilter,
) -> Vec<&'a ChecklistItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
