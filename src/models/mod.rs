//! Core data models for the expense tracker
//!
//! Expenses, their identifiers, the users they are attributed to and the
//! rules for turning typed amount text into numbers and back.

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::{format_amount, parse_amount};
pub use expense::{Expense, User};
pub use ids::ExpenseId;
