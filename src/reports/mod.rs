//! Read-side computations over the entry logs

pub mod totals;

pub use totals::{compute_totals, total_amount, Totals};
