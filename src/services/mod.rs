//! Service layer for the expense tracker
//!
//! The service layer holds the in-memory expense list and the operations
//! the UI triggers on it.

pub mod expense;

pub use expense::{ExpenseRow, ExpenseTracker, TrackerView};
