//! State management for the expense tracker.
//!
//! The crate has no I/O. It owns:
//!
//! - [`ExpenseStore`], the ordered in-memory list of [`Expense`]s;
//! - the [`aggregate`] functions deriving chart data from a store snapshot;
//! - the [`form`] boundary validating user text before it becomes an expense;
//! - [`ThemePreference`] resolution against the host [`Appearance`].
//!
//! ```rust
//! use engine::{ExpenseStore, aggregate};
//!
//! let store = ExpenseStore::with_sample_data();
//! let slices = aggregate::pie_slices(store.list());
//! assert_eq!(slices.len(), 3);
//! ```
pub use aggregate::{CategoryTotal, ChartMode, Slice};
pub use category::category_key;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::EngineError;
pub use expense::{Expense, ExpenseId, sample_expenses};
pub use form::{ExpenseDraft, FormField};
pub use store::ExpenseStore;
pub use theme::{Appearance, ThemePreference};

pub mod aggregate;
pub mod form;

mod category;
mod clock;
mod error;
mod expense;
mod store;
mod theme;

pub type ResultEngine<T> = Result<T, EngineError>;
