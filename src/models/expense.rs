//! Expense model
//!
//! An expense is a described amount attributed to one of a fixed set of
//! users. Expenses only exist in memory for the lifetime of the process.

use rand::Rng;
use std::fmt;

use super::amount::format_amount;
use super::ids::ExpenseId;

/// The user an expense is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum User {
    Alice,
    Bob,
    Charlie,
    Dave,
}

impl User {
    /// Every user, in display order
    pub const ALL: [User; 4] = [User::Alice, User::Bob, User::Charlie, User::Dave];

    /// Pick a user uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alice => "Alice",
            Self::Bob => "Bob",
            Self::Charlie => "Charlie",
            Self::Dave => "Dave",
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded expense
#[derive(Debug, Clone)]
pub struct Expense {
    /// Unique identifier, used for list keying and deletion
    pub id: ExpenseId,

    /// Free-form description, never empty
    pub description: String,

    /// Parsed amount; NaN when the entered text was not numeric
    pub amount: f64,

    /// Attributed user
    pub user: User,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub(crate) fn new(description: impl Into<String>, amount: f64, user: User) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            user,
        }
    }

    /// Text shown for this expense in the list
    pub fn row_text(&self) -> String {
        format!(
            "{} - ${} (User: {})",
            self.description,
            format_amount(self.amount),
            self.user
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_row_text() {
        let expense = Expense::new("Coffee", 4.5, User::Alice);
        assert_eq!(expense.row_text(), "Coffee - $4.50 (User: Alice)");
    }

    #[test]
    fn test_row_text_rounds_ties_up() {
        let expense = Expense::new("Tip", 0.125, User::Bob);
        assert_eq!(expense.row_text(), "Tip - $0.13 (User: Bob)");
    }

    #[test]
    fn test_row_text_nan_amount() {
        let expense = Expense::new("Snack", f64::NAN, User::Dave);
        assert_eq!(expense.row_text(), "Snack - $NaN (User: Dave)");
    }

    #[test]
    fn test_random_user_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<User> = (0..200).map(|_| User::random(&mut rng)).collect();
        assert_eq!(seen.len(), User::ALL.len());
    }

    #[test]
    fn test_user_display() {
        let names: Vec<String> = User::ALL.iter().map(|u| u.to_string()).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie", "Dave"]);
    }
}
