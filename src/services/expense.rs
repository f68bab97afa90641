//! Expense tracker service
//!
//! Owns the expense list and the two draft input buffers, and implements
//! the add, delete and view operations on them. Everything is synchronous
//! and in memory.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_amount, Expense, ExpenseId, User};

/// Title shown above the form
pub const DEFAULT_TITLE: &str = "Expense Tracker";

/// One list row of the projected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    /// Id the row's delete trigger is bound to
    pub id: ExpenseId,
    /// `<description> - $<amount> (User: <user>)`
    pub text: String,
}

/// Projection of the tracker state that the screen is drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerView {
    pub title: String,
    pub description_draft: String,
    pub amount_draft: String,
    pub rows: Vec<ExpenseRow>,
}

/// The expense list manager
#[derive(Debug)]
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
    description_draft: String,
    amount_draft: String,
    title: String,
    rng: StdRng,
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseTracker {
    /// Create an empty tracker with OS-seeded user selection
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty tracker with deterministic user selection
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            expenses: Vec::new(),
            description_draft: String::new(),
            amount_draft: String::new(),
            title: DEFAULT_TITLE.to_string(),
            rng,
        }
    }

    /// Override the title used by [`view`](Self::view)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get the expense at a list position
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn description_draft(&self) -> &str {
        &self.description_draft
    }

    pub fn amount_draft(&self) -> &str {
        &self.amount_draft
    }

    /// Replace the description draft (one call per keystroke)
    pub fn set_description_draft(&mut self, text: impl Into<String>) {
        self.description_draft = text.into();
    }

    /// Replace the amount draft (one call per keystroke)
    pub fn set_amount_draft(&mut self, text: impl Into<String>) {
        self.amount_draft = text.into();
    }

    /// Commit the drafts as a new expense
    ///
    /// Both drafts must be non-empty; whitespace counts as content. The
    /// amount is parsed leniently and a non-numeric draft is stored as NaN.
    /// On success the expense is appended and both drafts are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MissingFields`] if either draft is empty, in
    /// which case nothing is changed.
    pub fn add_expense(&mut self) -> TrackerResult<&Expense> {
        if self.description_draft.is_empty() || self.amount_draft.is_empty() {
            warn!(
                description_empty = self.description_draft.is_empty(),
                amount_empty = self.amount_draft.is_empty(),
                "add rejected: missing fields"
            );
            return Err(TrackerError::MissingFields);
        }

        let amount = parse_amount(&self.amount_draft);
        if amount.is_nan() {
            debug!(draft = %self.amount_draft, "amount is not numeric, storing NaN");
        }

        let description = std::mem::take(&mut self.description_draft);
        self.amount_draft.clear();

        let user = User::random(&mut self.rng);
        let expense = Expense::new(description, amount, user);
        info!(id = %expense.id, %user, amount, "expense added");

        self.expenses.push(expense);
        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Remove the expense with the given id
    ///
    /// Remaining expenses keep their relative order. Returns the removed
    /// expense, or `None` if no expense has that id.
    pub fn delete_expense(&mut self, id: &ExpenseId) -> Option<Expense> {
        match self.expenses.iter().position(|e| e.id == *id) {
            Some(index) => {
                let removed = self.expenses.remove(index);
                info!(id = %removed.id, "expense deleted");
                Some(removed)
            }
            None => {
                debug!(%id, "delete ignored: unknown id");
                None
            }
        }
    }

    /// Project the current state for display
    pub fn view(&self) -> TrackerView {
        TrackerView {
            title: self.title.clone(),
            description_draft: self.description_draft.clone(),
            amount_draft: self.amount_draft.clone(),
            rows: self
                .expenses
                .iter()
                .map(|e| ExpenseRow {
                    id: e.id,
                    text: e.row_text(),
                })
                .collect(),
        }
    }
}
