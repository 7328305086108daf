//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when the amount text of a draft is not a
//!   non-negative number.
//! - [`BlankField`] thrown when a required text field of a draft is blank.
//! - [`InvalidOption`] thrown when an option name (chart mode, appearance)
//!   is not recognized.
//! - [`UnknownExpense`] thrown when an edit targets an id the store does not
//!   hold.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`BlankField`]: EngineError::BlankField
//!  [`InvalidOption`]: EngineError::InvalidOption
//!  [`UnknownExpense`]: EngineError::UnknownExpense
use thiserror::Error;

use crate::ExpenseId;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("\"{0}\" must not be blank")]
    BlankField(String),
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    #[error("No expense with id {0}")]
    UnknownExpense(ExpenseId),
}
