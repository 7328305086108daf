//! Derived aggregates for the dashboard charts.
//!
//! Every function here is pure and takes a snapshot of the store, usually
//! [`ExpenseStore::list`](crate::ExpenseStore::list).
//!
//! [`pie_slices`] is what the dashboard draws by default: **one slice per
//! expense**, in store order, colored by position rather than by category. Two
//! expenses in the same category therefore yield two slices.
//! [`grouped_pie_slices`] is the category-bucketed alternative, selected with
//! [`ChartMode::Category`].

use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

use crate::{EngineError, Expense, category::category_key};

/// Number of colors the pie palette cycles through.
pub const PALETTE_SIZE: usize = 5;

/// Full turn, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// One angular segment of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub amount: f64,
    /// Degrees, counted from 0.
    pub start_angle: f64,
    /// Degrees covered by this slice.
    pub sweep_angle: f64,
    /// Index into the chart palette, `< PALETTE_SIZE`.
    pub palette_index: usize,
}

/// Amount spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    /// Share of the overall total, in `0.0..=1.0`.
    pub proportion: f64,
}

/// How the dashboard pie is sliced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartMode {
    /// One slice per expense.
    #[default]
    Transaction,
    /// One slice per case-normalized category.
    Category,
}

impl ChartMode {
    pub fn slices(self, expenses: &[Expense]) -> Vec<Slice> {
        match self {
            Self::Transaction => pie_slices(expenses),
            Self::Category => grouped_pie_slices(expenses),
        }
    }
}

impl FromStr for ChartMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transaction" => Ok(Self::Transaction),
            "category" => Ok(Self::Category),
            other => Err(EngineError::InvalidOption(format!(
                "unknown chart mode: {other}"
            ))),
        }
    }
}

/// Deserializes through [`FromStr`], so config files and environment
/// variables accept the same spellings as the command line.
impl<'de> Deserialize<'de> for ChartMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Sum of every amount.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Totals per category label, in order of first appearance.
///
/// Labels are compared verbatim: `"Food"` and `"food"` are two categories.
/// Returns nothing when the overall total is not positive.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let amounts: Vec<f64> = expenses.iter().map(|e| e.amount).collect();
    let Some(scale) = Scale::of(&amounts) else {
        return Vec::new();
    };

    // (entry, scaled amount)
    let mut totals: Vec<(CategoryTotal, f64)> = Vec::new();
    for expense in expenses {
        let scaled = scale.apply(expense.amount);
        match totals.iter_mut().find(|(t, _)| t.category == expense.category) {
            Some((entry, sum)) => {
                entry.amount += expense.amount;
                *sum += scaled;
            }
            None => totals.push((
                CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                    proportion: 0.0,
                },
                scaled,
            )),
        }
    }
    totals
        .into_iter()
        .map(|(entry, scaled)| CategoryTotal {
            proportion: scaled / scale.sum,
            ..entry
        })
        .collect()
}

/// One slice per expense, in store order.
///
/// Empty when the total is not positive, so the caller can draw its empty
/// state instead.
pub fn pie_slices(expenses: &[Expense]) -> Vec<Slice> {
    let parts = expenses
        .iter()
        .map(|e| (e.description.clone(), e.amount))
        .collect::<Vec<_>>();
    build_slices(parts)
}

/// One slice per category, grouped by [`category_key`] and labeled with the
/// first spelling seen.
pub fn grouped_pie_slices(expenses: &[Expense]) -> Vec<Slice> {
    let mut groups: Vec<(String, String, f64)> = Vec::new();
    for expense in expenses {
        let key = category_key(&expense.category);
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, amount)) => *amount += expense.amount,
            None => groups.push((key, expense.category.trim().to_string(), expense.amount)),
        }
    }
    build_slices(
        groups
            .into_iter()
            .map(|(_, label, amount)| (label, amount))
            .collect(),
    )
}

/// Amounts divided by the largest one, so summing them cannot overflow even
/// when the raw total would.
struct Scale {
    max: f64,
    /// Sum of the scaled amounts.
    sum: f64,
}

impl Scale {
    /// `None` when there is nothing positive to divide up.
    fn of(amounts: &[f64]) -> Option<Self> {
        let max = amounts.iter().copied().fold(0.0_f64, f64::max);
        if !(max > 0.0 && max.is_finite()) {
            return None;
        }
        let sum: f64 = amounts.iter().map(|a| a / max).sum();
        (sum > 0.0).then_some(Self { max, sum })
    }

    fn apply(&self, amount: f64) -> f64 {
        amount / self.max
    }

    fn share(&self, amount: f64) -> f64 {
        self.apply(amount) / self.sum
    }
}

fn build_slices(parts: Vec<(String, f64)>) -> Vec<Slice> {
    let amounts: Vec<f64> = parts.iter().map(|(_, amount)| *amount).collect();
    let Some(scale) = Scale::of(&amounts) else {
        return Vec::new();
    };

    let mut start_angle = 0.0;
    parts
        .into_iter()
        .enumerate()
        .map(|(index, (label, amount))| {
            let sweep_angle = scale.share(amount) * FULL_TURN;
            let slice = Slice {
                label,
                amount,
                start_angle,
                sweep_angle,
                palette_index: index % PALETTE_SIZE,
            };
            start_angle += sweep_angle;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_expenses;

    const TOLERANCE: f64 = 0.1;

    fn expense(id: i64, amount: f64, category: &str) -> Expense {
        Expense::new(id, format!("item {id}"), amount, category)
    }

    #[test]
    fn sample_slices_match_expected_angles() {
        let expenses = sample_expenses();
        assert!((total(&expenses) - 140.50).abs() < 1e-9);

        let angles: Vec<f64> = pie_slices(&expenses).iter().map(|s| s.sweep_angle).collect();
        let expected = [193.41, 102.49, 64.06];
        assert_eq!(angles.len(), expected.len());
        for (angle, want) in angles.iter().zip(expected) {
            assert!((angle - want).abs() < TOLERANCE, "{angle} vs {want}");
        }
    }

    #[test]
    fn slices_cover_a_full_turn() {
        let expenses = vec![
            expense(1, 0.1, "a"),
            expense(2, 0.2, "b"),
            expense(3, 1234.56, "c"),
            expense(4, 0.0, "d"),
            expense(5, 7.77, "e"),
            expense(6, 3.0, "f"),
        ];
        let slices = pie_slices(&expenses);
        let sum: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        assert!((sum - FULL_TURN).abs() < 1e-6);

        let last = slices.last().map(|s| s.start_angle + s.sweep_angle);
        assert!(last.is_some_and(|end| (end - FULL_TURN).abs() < 1e-6));
    }

    #[test]
    fn start_angles_accumulate() {
        let slices = pie_slices(&[expense(1, 1.0, "a"), expense(2, 3.0, "b")]);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[1].start_angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn empty_or_zero_total_yields_no_slices() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[expense(1, 0.0, "a"), expense(2, 0.0, "b")]).is_empty());
        assert!(category_totals(&[]).is_empty());
        assert!(grouped_pie_slices(&[expense(1, 0.0, "a")]).is_empty());
    }

    #[test]
    fn palette_cycles_by_position_not_category() {
        let expenses: Vec<Expense> = (0..7).map(|i| expense(i, 1.0, "Food")).collect();
        let indexes: Vec<usize> = pie_slices(&expenses)
            .iter()
            .map(|s| s.palette_index)
            .collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn same_category_stays_split_per_transaction() {
        let expenses = vec![
            expense(1, 10.0, "Food"),
            expense(2, 10.0, "Transport"),
            expense(3, 20.0, "Food"),
        ];
        let slices = pie_slices(&expenses);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[2].label, "item 3");
    }

    #[test]
    fn category_totals_group_verbatim() {
        let expenses = vec![
            expense(1, 10.0, "Food"),
            expense(2, 30.0, "Transport"),
            expense(3, 20.0, "Food"),
            expense(4, 40.0, "food"),
        ];
        let totals = category_totals(&expenses);
        let labels: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Transport", "food"]);
        assert!((totals[0].amount - 30.0).abs() < 1e-9);
        assert!((totals[0].proportion - 0.3).abs() < 1e-9);
        let share: f64 = totals.iter().map(|t| t.proportion).sum();
        assert!((share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn grouped_slices_merge_normalized_categories() {
        let expenses = vec![
            expense(1, 10.0, "Food"),
            expense(2, 30.0, "Transport"),
            expense(3, 20.0, "food "),
        ];
        let slices = grouped_pie_slices(&expenses);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Food");
        assert!((slices[0].amount - 30.0).abs() < 1e-9);
        assert!((slices[0].sweep_angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn huge_amounts_still_cover_a_full_turn() {
        let expenses = vec![expense(1, 1e308, "a"), expense(2, 1e308, "b")];
        assert!(total(&expenses).is_infinite());

        let slices = pie_slices(&expenses);
        assert_eq!(slices.len(), 2);
        let sum: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        assert!((sum - FULL_TURN).abs() < 1e-6);
        assert!((slices[1].start_angle - 180.0).abs() < 1e-9);

        let grouped = grouped_pie_slices(&[expense(1, 1e308, "a"), expense(2, 1e308, "A")]);
        assert_eq!(grouped.len(), 1);
        assert!((grouped[0].sweep_angle - FULL_TURN).abs() < 1e-6);

        let totals = category_totals(&expenses);
        assert_eq!(totals.len(), 2);
        assert!((totals[0].proportion - 0.5).abs() < 1e-9);
        assert!((totals[1].proportion - 0.5).abs() < 1e-9);
    }

    #[test]
    fn chart_mode_parses_and_dispatches() {
        assert_eq!("Category".parse::<ChartMode>(), Ok(ChartMode::Category));
        assert_eq!(" transaction".parse::<ChartMode>(), Ok(ChartMode::Transaction));
        assert!("bucket".parse::<ChartMode>().is_err());

        let expenses = vec![expense(1, 1.0, "a"), expense(2, 1.0, "A")];
        assert_eq!(ChartMode::Transaction.slices(&expenses).len(), 2);
        assert_eq!(ChartMode::Category.slices(&expenses).len(), 1);
    }
}
