use std::fmt;

/// Identifier of an [`Expense`], taken from the creation timestamp in
/// milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ExpenseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded transaction.
///
/// Values are never mutated in place: editing builds a new `Expense` with the
/// same id and replaces the stored one wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl Expense {
    pub fn new(
        id: impl Into<ExpenseId>,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            category: category.into(),
        }
    }
}

/// Expenses shown when the application starts.
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new(1, "Groceries", 75.50, "Food"),
        Expense::new(2, "Gas", 40.00, "Transport"),
        Expense::new(3, "Movie Tickets", 25.00, "Entertainment"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_expenses_have_distinct_ids_in_order() {
        let ids: Vec<i64> = sample_expenses().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn expense_id_displays_raw_value() {
        assert_eq!(ExpenseId::new(1_700_000_000_123).to_string(), "1700000000123");
    }
}
