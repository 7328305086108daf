//! In-memory expense collection.

use crate::expense::{Expense, ExpenseId, sample_expenses};

/// Ordered collection of expenses, kept in insertion order.
///
/// The store performs no validation: callers go through
/// [`ExpenseDraft`](crate::ExpenseDraft) before handing an expense over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the startup sample expenses.
    pub fn with_sample_data() -> Self {
        Self {
            expenses: sample_expenses(),
        }
    }

    /// Append `expense` at the end.
    pub fn add(&mut self, expense: Expense) {
        tracing::debug!(id = %expense.id, "expense added");
        self.expenses.push(expense);
    }

    /// Replace the first expense with the same id, keeping its position.
    ///
    /// Does nothing when no expense has that id. Returns whether a
    /// replacement happened.
    pub fn update(&mut self, expense: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                tracing::debug!(id = %expense.id, "expense updated");
                *slot = expense;
                true
            }
            None => {
                tracing::debug!(id = %expense.id, "update ignored, id not in store");
                false
            }
        }
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl From<Vec<Expense>> for ExpenseStore {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, description: &str, amount: f64, category: &str) -> Expense {
        Expense::new(id, description, amount, category)
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut store = ExpenseStore::new();
        store.add(expense(30, "c", 1.0, "x"));
        store.add(expense(10, "a", 2.0, "y"));
        store.add(expense(20, "b", 3.0, "z"));

        let ids: Vec<i64> = store.list().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = ExpenseStore::with_sample_data();
        let replaced = store.update(expense(2, "Gasoline", 45.00, "Transport"));

        assert!(replaced);
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[1], expense(2, "Gasoline", 45.00, "Transport"));
        assert_eq!(store.list()[0].description, "Groceries");
        assert_eq!(store.list()[2].description, "Movie Tickets");
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let mut store = ExpenseStore::with_sample_data();
        let before = store.clone();

        assert!(!store.update(expense(99, "Ghost", 1.0, "None")));
        assert_eq!(store, before);
    }

    #[test]
    fn update_touches_only_the_first_duplicate() {
        let mut store = ExpenseStore::from(vec![
            expense(7, "first", 1.0, "a"),
            expense(7, "second", 2.0, "b"),
        ]);
        store.update(expense(7, "edited", 3.0, "c"));

        assert_eq!(store.list()[0].description, "edited");
        assert_eq!(store.list()[1].description, "second");
    }

    #[test]
    fn get_finds_by_id() {
        let store = ExpenseStore::with_sample_data();
        assert_eq!(
            store.get(ExpenseId::new(3)).map(|e| e.description.as_str()),
            Some("Movie Tickets")
        );
        assert!(store.get(ExpenseId::new(4)).is_none());
    }
}
