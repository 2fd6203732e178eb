//! Delimited-text serialization
//!
//! Produces a comma-separated document with one quoted header row and one
//! quoted row per record. Every field is quoted unconditionally, with inner
//! double quotes doubled; this keeps the output parseable by any quote-aware
//! reader no matter what the values contain (commas, quotes, newlines).
//! Rows are joined with a single `\n` and there is no trailing newline.

use tracing::debug;

use super::{ExportFile, TabularRecord};
use crate::models::{ExpenseEntry, IncomeEntry};
use crate::store::Session;

/// Column order for income exports
pub const INCOME_FIELDS: [&str; 5] = ["date", "source", "type", "amount", "notes"];

/// Column order for expense exports
pub const EXPENSE_FIELDS: [&str; 6] = [
    "date",
    "description",
    "category",
    "paymentMethod",
    "amount",
    "notes",
];

/// Filename offered for income exports
pub const INCOME_FILENAME: &str = "Income_Log.csv";

/// Filename offered for expense exports
pub const EXPENSE_FILENAME: &str = "Expense_Log.csv";

/// Quote a field value, doubling any embedded double quotes
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serialize records into a delimited-text document.
///
/// For each record, each field name is looked up via [`TabularRecord`];
/// absent fields degrade to the empty string. The transformation cannot
/// fail and is lossless for the supplied field names: re-reading the output
/// with a quote-aware parser reconstructs the original values exactly.
pub fn to_delimited_text<R: TabularRecord>(records: &[R], field_names: &[&str]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        field_names
            .iter()
            .map(|name| quote(name))
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in records {
        lines.push(
            field_names
                .iter()
                .map(|name| quote(record.field(name).unwrap_or("")))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Serialize income entries with the income column order
pub fn income_csv(entries: &[IncomeEntry]) -> String {
    to_delimited_text(entries, &INCOME_FIELDS)
}

/// Serialize expense entries with the expense column order
pub fn expense_csv(entries: &[ExpenseEntry]) -> String {
    to_delimited_text(entries, &EXPENSE_FIELDS)
}

/// Build the downloadable income export for a session
pub fn income_export(session: &Session) -> ExportFile {
    let content = income_csv(session.income().as_slice());
    debug!(
        "exporting {} income entries ({} bytes)",
        session.income().len(),
        content.len()
    );
    ExportFile {
        filename: INCOME_FILENAME,
        content,
    }
}

/// Build the downloadable expense export for a session
pub fn expense_export(session: &Session) -> ExportFile {
    let content = expense_csv(session.expenses().as_slice());
    debug!(
        "exporting {} expense entries ({} bytes)",
        session.expenses().len(),
        content.len()
    );
    ExportFile {
        filename: EXPENSE_FILENAME,
        content,
    }
}
