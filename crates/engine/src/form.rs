//! Add/Edit form boundary.
//!
//! Raw text lives in an [`ExpenseDraft`] until the user saves. Saving
//! validates the draft; an invalid draft never reaches the store.

use crate::{Clock, EngineError, Expense, ExpenseId, ExpenseStore, ResultEngine};

/// Returns `true` if `text` is an acceptable partial amount: digits with at
/// most one `.` anywhere (`^\d*\.?\d*$`). The empty string is accepted.
pub fn is_amount_input(text: &str) -> bool {
    let mut seen_dot = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Parses a finished amount: it must pass [`is_amount_input`] and contain at
/// least one digit.
pub fn parse_amount(text: &str) -> ResultEngine<f64> {
    if !is_amount_input(text) {
        return Err(EngineError::InvalidAmount(format!("\"{text}\" is not a number")));
    }
    let value: f64 = text
        .parse()
        .map_err(|_| EngineError::InvalidAmount(format!("\"{text}\" is not a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidAmount(format!("\"{text}\" is out of range")));
    }
    Ok(value)
}

/// A text field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Category,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Description, Self::Amount, Self::Category];

    pub fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Category => "Category",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// Unvalidated text of the Add/Edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl ExpenseDraft {
    /// Pre-fill from an existing expense.
    pub fn for_expense(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Description => &self.description,
            FormField::Amount => &self.amount,
            FormField::Category => &self.category,
        }
    }

    /// Replace the text of `field`.
    ///
    /// Amount edits that would break [`is_amount_input`] are refused and the
    /// previous value is kept. Returns whether the value changed.
    pub fn set(&mut self, field: FormField, text: impl Into<String>) -> bool {
        let text = text.into();
        match field {
            FormField::Description => self.description = text,
            FormField::Amount => {
                if !is_amount_input(&text) {
                    return false;
                }
                self.amount = text;
            }
            FormField::Category => self.category = text,
        }
        true
    }

    /// Append one character to `field`, subject to the same filter as [`set`](Self::set).
    pub fn push(&mut self, field: FormField, ch: char) -> bool {
        let mut text = self.value(field).to_string();
        text.push(ch);
        self.set(field, text)
    }

    /// Remove the last character of `field`.
    pub fn pop(&mut self, field: FormField) {
        let mut text = self.value(field).to_string();
        if text.pop().is_some() {
            self.set(field, text);
        }
    }

    /// Validate the draft into an [`Expense`].
    ///
    /// Editing keeps `existing`; adding takes the id from `clock`.
    pub fn build(
        &self,
        existing: Option<ExpenseId>,
        clock: &dyn Clock,
    ) -> ResultEngine<Expense> {
        let amount = parse_amount(&self.amount)?;
        if self.description.trim().is_empty() {
            return Err(EngineError::BlankField(FormField::Description.label().to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(EngineError::BlankField(FormField::Category.label().to_string()));
        }

        let id = existing.unwrap_or_else(|| ExpenseId::new(clock.now_millis()));
        Ok(Expense {
            id,
            description: self.description.clone(),
            amount,
            category: self.category.clone(),
        })
    }
}

/// Validate `draft` and store it: append when `existing` is `None`, replace
/// the expense with that id otherwise.
///
/// On error the store is left untouched. Editing an id the store does not
/// hold is [`EngineError::UnknownExpense`].
pub fn commit(
    store: &mut ExpenseStore,
    draft: &ExpenseDraft,
    existing: Option<ExpenseId>,
    clock: &dyn Clock,
) -> ResultEngine<Expense> {
    let expense = draft.build(existing, clock)?;
    match existing {
        None => store.add(expense.clone()),
        Some(id) => {
            if !store.update(expense.clone()) {
                return Err(EngineError::UnknownExpense(id));
            }
        }
    }
    Ok(expense)
}
