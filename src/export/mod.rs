//! CSV export functionality
//!
//! The serializer is decoupled from any particular entry shape: it works on
//! anything implementing [`TabularRecord`] plus an explicit ordered list of
//! field names. The actual file delivery (browser download, disk write, ...)
//! belongs to the caller; this module only produces the payload.

pub mod csv;

pub use csv::{
    expense_csv, expense_export, income_csv, income_export, to_delimited_text, EXPENSE_FIELDS,
    EXPENSE_FILENAME, INCOME_FIELDS, INCOME_FILENAME,
};

/// MIME type for the exported documents
pub const CSV_MIME: &str = "text/csv";

/// Field lookup by name, for schema-driven serialization.
///
/// Returning `None` for an unknown or absent field is not an error; the
/// serializer writes it as an empty string.
pub trait TabularRecord {
    fn field(&self, name: &str) -> Option<&str>;
}

/// A ready-to-deliver export: filename plus CSV payload.
///
/// The delivering collaborator must offer `content` as-is under `filename`
/// with the [`CSV_MIME`] type, without re-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub content: String,
}
