//! Expense Tracker - single-screen terminal expense list
//!
//! Record short expenses (description and amount), each attributed to a
//! randomly chosen user, and delete them again. Everything lives in memory
//! for the lifetime of the process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Expenses, ids, users and amount parsing
//! - `services`: The expense list manager and its view projection
//! - `tui`: The terminal interface
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::services::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::new();
//! tracker.set_description_draft("Coffee");
//! tracker.set_amount_draft("4.5");
//! tracker.add_expense().unwrap();
//! assert_eq!(tracker.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::TrackerError;
