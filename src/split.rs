//! The allocation engine: an in-progress split of one expense.
//!
//! A `SplitSession` is exclusively owned by one editing flow. The form layer
//! drives it with user events (total changed, member toggled, custom amount
//! typed) and reads back `totals()` / `is_valid()` after every call. Nothing
//! here performs I/O and no operation can fail: malformed input is clamped
//! and the resulting state is observable through `is_valid()`.

use crate::amounts::{allocations_look_equal, is_involved_amount, parse_amount};
use crate::constants::SPLIT_TOLERANCE;
use crate::models::{Allocation, Member};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMethod {
    Equal,
    Custom,
}

/// Running totals the form renders next to the member list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitTotals {
    /// Sum of amounts for involved members only.
    pub allocated: f64,
    /// `total_amount - allocated`; the user still has this much to assign.
    pub remaining: f64,
}

#[derive(Clone, Debug)]
pub struct SplitSession {
    total_amount: f64,
    method: SplitMethod,
    involved: BTreeSet<Uuid>,
    // One entry per pool member, keyed (and therefore ordered) by member id.
    // Uninvolved members keep their entry at whatever amount they last had.
    allocations: BTreeMap<Uuid, f64>,
}

impl SplitSession {
    /// Create-mode session: everyone in the pool involved, split equally.
    pub fn new(total_amount: f64, pool: &[Member]) -> Self {
        let mut session = SplitSession {
            total_amount: clamp_total(total_amount),
            method: SplitMethod::Equal,
            involved: pool.iter().map(|m| m.id).collect(),
            allocations: pool.iter().map(|m| (m.id, 0.0)).collect(),
        };
        session.recompute_equal();
        debug!(
            "New split session: total {} across {} members",
            session.total_amount,
            pool.len()
        );
        session
    }

    /// Edit-mode session reconstructed from stored allocations. Members with
    /// a real share are involved; the split counts as equal when all involved
    /// amounts are mutually within tolerance, otherwise the stored custom
    /// amounts are preserved exactly. An empty `prior` behaves as create mode.
    pub fn from_allocations(total_amount: f64, pool: &[Member], prior: &[Allocation]) -> Self {
        if prior.is_empty() {
            return Self::new(total_amount, pool);
        }

        let method = if allocations_look_equal(prior) {
            SplitMethod::Equal
        } else {
            SplitMethod::Custom
        };
        let involved: BTreeSet<Uuid> = prior
            .iter()
            .filter(|a| is_involved_amount(a.amount))
            .filter(|a| pool.iter().any(|m| m.id == a.member_id))
            .map(|a| a.member_id)
            .collect();
        let allocations = pool
            .iter()
            .map(|m| {
                let amount = prior
                    .iter()
                    .find(|a| a.member_id == m.id)
                    .map(|a| a.amount)
                    .unwrap_or(0.0);
                (m.id, amount)
            })
            .collect();

        let mut session = SplitSession {
            total_amount: clamp_total(total_amount),
            method,
            involved,
            allocations,
        };
        if session.method == SplitMethod::Equal {
            session.recompute_equal();
        }
        debug!(
            "Reconstructed split session: {:?} with {} involved",
            session.method,
            session.involved.len()
        );
        session
    }

    /// Re-runs create-mode initialization against a new member pool, keeping
    /// the current total. Stale allocations from the previous pool are
    /// discarded, never merged.
    pub fn reset_pool(&mut self, pool: &[Member]) {
        self.method = SplitMethod::Equal;
        self.involved = pool.iter().map(|m| m.id).collect();
        self.allocations = pool.iter().map(|m| (m.id, 0.0)).collect();
        self.recompute_equal();
    }

    pub fn set_split_method(&mut self, method: SplitMethod) {
        if method == self.method {
            // Same-method calls are no-ops; re-deriving equal shares from the
            // same inputs yields the same amounts anyway.
            if method == SplitMethod::Equal {
                self.recompute_equal();
            }
            return;
        }
        match method {
            SplitMethod::Custom => {
                // Convenience starting point: if the custom fields were never
                // touched (all involved amounts still zero), seed them with
                // the equal shares instead of making the user retype them.
                let untouched = self
                    .involved
                    .iter()
                    .all(|id| !is_involved_amount(self.allocations[id]));
                self.method = SplitMethod::Custom;
                if untouched && self.total_amount > 0.0 {
                    let share = self.equal_share();
                    for id in &self.involved {
                        self.allocations.insert(*id, share);
                    }
                }
            }
            SplitMethod::Equal => {
                self.method = SplitMethod::Equal;
                self.recompute_equal();
            }
        }
    }

    /// Adds or removes a member from the split. Ids outside the pool are
    /// ignored. Does not change the split method.
    pub fn toggle_involvement(&mut self, member_id: Uuid) {
        if !self.allocations.contains_key(&member_id) {
            debug!("Ignoring toggle for unknown member {}", member_id);
            return;
        }
        if !self.involved.remove(&member_id) {
            self.involved.insert(member_id);
        }
        if self.method == SplitMethod::Equal {
            self.recompute_equal();
        }
    }

    /// Non-finite or negative totals clamp to 0; validity reflects it.
    pub fn set_total_amount(&mut self, amount: f64) {
        self.total_amount = clamp_total(amount);
        if self.method == SplitMethod::Equal {
            self.recompute_equal();
        }
    }

    /// Sets one member's custom share from user-entered text. Only meaningful
    /// under `Custom`; invalid or negative input clamps to 0. Other members
    /// are untouched.
    pub fn update_allocation(&mut self, member_id: Uuid, text: &str) {
        if self.method != SplitMethod::Custom {
            return;
        }
        if let Some(amount) = self.allocations.get_mut(&member_id) {
            *amount = parse_amount(text);
        }
    }

    pub fn totals(&self) -> SplitTotals {
        let allocated: f64 = self
            .allocations
            .iter()
            .filter(|(id, _)| self.involved.contains(id))
            .map(|(_, amount)| amount)
            .sum();
        SplitTotals {
            allocated,
            remaining: self.total_amount - allocated,
        }
    }

    /// The split is committable: everything is allocated within tolerance,
    /// someone is involved, and there is an amount to split.
    pub fn is_valid(&self) -> bool {
        let totals = self.totals();
        totals.remaining.abs() < SPLIT_TOLERANCE
            && !self.involved.is_empty()
            && self.total_amount > 0.0
    }

    /// The rows to persist: involved members with a real share, ordered by
    /// member id. Uninvolved and near-zero entries must never be written.
    pub fn finalize(&self) -> Vec<Allocation> {
        self.allocations
            .iter()
            .filter(|(id, amount)| self.involved.contains(id) && is_involved_amount(**amount))
            .map(|(id, amount)| Allocation {
                member_id: *id,
                amount: *amount,
            })
            .collect()
    }

    pub fn method(&self) -> SplitMethod {
        self.method
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn involved(&self) -> &BTreeSet<Uuid> {
        &self.involved
    }

    pub fn amount_for(&self, member_id: Uuid) -> f64 {
        self.allocations.get(&member_id).copied().unwrap_or(0.0)
    }

    /// Current per-member amounts in member-id order, including zeros, for
    /// the form to render.
    pub fn allocations(&self) -> impl Iterator<Item = (Uuid, f64)> + '_ {
        self.allocations.iter().map(|(id, amount)| (*id, *amount))
    }

    // Raw floating division, no rounding: re-running with the same inputs
    // always yields the same amounts. Rounding happens at display time.
    fn recompute_equal(&mut self) {
        let share = self.equal_share();
        for (id, amount) in self.allocations.iter_mut() {
            *amount = if self.involved.contains(id) { share } else { 0.0 };
        }
    }

    fn equal_share(&self) -> f64 {
        if self.involved.is_empty() {
            0.0
        } else {
            self.total_amount / self.involved.len() as f64
        }
    }
}

fn clamp_total(amount: f64) -> f64 {
    if amount.is_finite() { amount.max(0.0) } else { 0.0 }
}
