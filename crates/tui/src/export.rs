//! CSV export of the expense table.

use std::path::PathBuf;

use serde::Serialize;

use engine::Trip;

use crate::error::Result;

#[derive(Serialize)]
struct ExportRow<'a> {
    category: &'a str,
    description: &'a str,
    paid_by: &'a str,
    /// Plain decimal, no currency symbol, so the file loads into anything.
    amount: String,
}

/// Writes the trip's expenses next to the binary and returns the path.
pub fn write_expenses(trip: &Trip) -> Result<PathBuf> {
    let slug = trip.name.to_lowercase().replace(' ', "-");
    let path = PathBuf::from(format!("expenses-{slug}.csv"));

    let mut writer = csv::Writer::from_path(&path)?;
    for expense in trip.expenses() {
        let cents = expense.amount.cents();
        writer.serialize(ExportRow {
            category: &expense.category,
            description: &expense.description,
            paid_by: &expense.paid_by,
            amount: format!("{}.{:02}", cents / 100, cents % 100),
        })?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), "expenses exported");
    Ok(path)
}
