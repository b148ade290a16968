//! Net balances derived from the expense history.

use crate::models::{Balance, Expense, Member};
use log::debug;
use std::collections::HashMap;
use uuid::Uuid;

/// Computes each member's net position: the payer is credited the full
/// expense amount (they fronted the money), every allocated member is
/// debited their share. Pure function over its inputs; balances are always
/// recomputed from scratch, never stored.
///
/// The output carries one entry per input member in input order, zeros
/// included. Expenses are processed in input order, soft-deleted ones are
/// skipped, and payer or allocation ids absent from `members` contribute
/// nothing.
pub fn calculate_balances(members: &[Member], expenses: &[Expense]) -> Vec<Balance> {
    let mut totals: HashMap<Uuid, f64> = members.iter().map(|m| (m.id, 0.0)).collect();

    for expense in expenses.iter().filter(|e| e.deleted_at.is_none()) {
        if let Some(total) = totals.get_mut(&expense.payer_id) {
            *total += expense.amount;
        }
        for allocation in &expense.allocations {
            if let Some(total) = totals.get_mut(&allocation.member_id) {
                *total -= allocation.amount;
            }
        }
    }

    debug!(
        "Calculated balances for {} members over {} expenses",
        members.len(),
        expenses.len()
    );

    members
        .iter()
        .map(|m| Balance {
            member_id: m.id,
            amount: totals[&m.id],
        })
        .collect()
}
