//! Reporting helpers over the expense history.

use crate::models::{Category, CategoryTotal, Expense};
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

const UNCATEGORIZED: &str = "Uncategorized";

/// Groups non-deleted expenses by category and sums their amounts, largest
/// first. Expenses whose category id is unknown land under "Uncategorized".
/// Ties sort by name so the output is deterministic.
pub fn category_totals(expenses: &[Expense], categories: &[Category]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for expense in expenses.iter().filter(|e| e.deleted_at.is_none()) {
        let name = categories
            .iter()
            .find(|c| c.id == expense.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED);
        *sums.entry(name).or_insert(0.0) += expense.amount;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(name, value)| CategoryTotal {
            name: name.to_string(),
            value,
        })
        .collect();
    totals.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!("Computed {} category totals", totals.len());
    totals
}

/// Total spend across non-deleted expenses dated within `[from, to]`.
pub fn total_between(expenses: &[Expense], from: NaiveDate, to: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.deleted_at.is_none() && e.date >= from && e.date <= to)
        .map(|e| e.amount)
        .sum()
}
