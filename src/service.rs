use crate::balance;
use crate::constants::SPLIT_TOLERANCE;
use crate::error::SplitbookError;
use crate::logger::AuditLogger;
use crate::models::*;
use crate::report;
use crate::{amounts::is_involved_amount, storage::Storage};
use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use serde_json;
use uuid::Uuid;

pub struct LedgerService<'a> {
    pub storage: &'a mut dyn Storage,
    pub audit_logger: &'a mut dyn AuditLogger,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a mut dyn Storage, audit_logger: &'a mut dyn AuditLogger) -> Self {
        info!("Initializing LedgerService");
        Self {
            storage,
            audit_logger,
        }
    }

    // GROUP & MEMBER MANAGEMENT

    pub fn create_group(
        &mut self,
        name: String,
        currency: String,
        kind: GroupKind,
    ) -> Result<Group, SplitbookError> {
        info!("Creating group '{}' in {}", name, currency);
        let now = Utc::now();
        let group = Group {
            id: Uuid::new_v4(),
            name,
            currency,
            kind,
            created_at: now,
        };

        let created = self.storage.create_group(group)?;
        debug!("Group created with ID: {}", created.id);

        self.audit_logger.log(AuditLogEntry::new(
            Some(created.id),
            AuditAction::CreateGroup,
            &serde_json::json!({ "group_id": created.id }),
            now,
        ));

        Ok(created)
    }

    pub fn add_member(&mut self, group: &Group, name: String) -> Result<Member, SplitbookError> {
        info!("Adding member '{}' to group {}", name, group.id);
        let member = Member {
            id: Uuid::new_v4(),
            group_id: group.id,
            name,
        };

        let created = self.storage.create_member(member)?;
        debug!("Member created with ID: {}", created.id);

        self.audit_logger.log(AuditLogEntry::new(
            Some(group.id),
            AuditAction::AddMember,
            &serde_json::json!({ "member_id": created.id }),
            Utc::now(),
        ));

        Ok(created)
    }

    pub fn create_category(&mut self, name: String) -> Result<Category, SplitbookError> {
        info!("Creating category '{}'", name);
        let category = Category {
            id: Uuid::new_v4(),
            name,
        };
        let created = self.storage.create_category(category)?;

        self.audit_logger.log(AuditLogEntry::new(
            None,
            AuditAction::CreateCategory,
            &serde_json::json!({ "category_id": created.id }),
            Utc::now(),
        ));

        Ok(created)
    }

    // EXPENSE MANAGEMENT

    #[allow(clippy::too_many_arguments)]
    pub fn create_expense(
        &mut self,
        group: &Group,
        payer_id: Uuid,
        category_id: Uuid,
        amount: f64,
        date: NaiveDate,
        description: String,
        allocations: Vec<Allocation>,
    ) -> Result<Expense, SplitbookError> {
        info!(
            "Creating expense in group {} paid by {} for amount {}",
            group.id, payer_id, amount
        );
        if !self.storage.is_group_member(group.id, payer_id) {
            warn!("Payer {} not in group {}", payer_id, group.id);
            return Err(SplitbookError::NotGroupMember(payer_id));
        }
        let allocations = self.check_allocations(group.id, amount, allocations)?;

        let now = Utc::now();
        let expense = Expense {
            id: Uuid::new_v4(),
            group_id: group.id,
            payer_id,
            category_id,
            amount,
            description,
            date,
            allocations,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self.storage.create_expense(expense)?;
        debug!("Expense created with ID: {}", created.id);

        self.audit_logger.log(AuditLogEntry::new(
            Some(group.id),
            AuditAction::CreateExpense,
            &serde_json::json!({ "expense_id": created.id, "amount": amount }),
            now,
        ));

        Ok(created)
    }

    /// Replaces the expense's fields and its whole allocation set in one
    /// storage write (delete-all-then-reinsert semantics; no partial update).
    #[allow(clippy::too_many_arguments)]
    pub fn update_expense(
        &mut self,
        expense: &Expense,
        payer_id: Uuid,
        category_id: Uuid,
        new_amount: f64,
        new_date: NaiveDate,
        new_description: String,
        new_allocations: Vec<Allocation>,
    ) -> Result<Expense, SplitbookError> {
        info!("Updating expense {} in group {}", expense.id, expense.group_id);
        if !self.storage.is_group_member(expense.group_id, payer_id) {
            warn!("Payer {} not in group {}", payer_id, expense.group_id);
            return Err(SplitbookError::NotGroupMember(payer_id));
        }
        let new_allocations = self.check_allocations(expense.group_id, new_amount, new_allocations)?;

        let now = Utc::now();
        let updated = Expense {
            payer_id,
            category_id,
            amount: new_amount,
            date: new_date,
            description: new_description,
            allocations: new_allocations,
            updated_at: now,
            ..expense.clone()
        };
        let saved = self.storage.update_expense(updated)?;
        debug!("Expense updated: {}", saved.id);

        self.audit_logger.log(AuditLogEntry::new(
            Some(expense.group_id),
            AuditAction::UpdateExpense,
            &serde_json::json!({ "expense_id": saved.id, "new_amount": new_amount }),
            now,
        ));

        Ok(saved)
    }

    pub fn delete_expense(&mut self, expense: &Expense) -> Result<Expense, SplitbookError> {
        info!("Deleting expense {} in group {}", expense.id, expense.group_id);
        if expense.deleted_at.is_some() {
            warn!("Expense {} already deleted", expense.id);
            return Err(SplitbookError::AlreadyDeleted(expense.id));
        }

        let now = Utc::now();
        let deleted = Expense {
            deleted_at: Some(now),
            updated_at: now,
            ..expense.clone()
        };
        let saved = self.storage.update_expense(deleted)?;
        debug!("Expense soft deleted: {}", saved.id);

        self.audit_logger.log(AuditLogEntry::new(
            Some(expense.group_id),
            AuditAction::DeleteExpense,
            &serde_json::json!({ "expense_id": saved.id }),
            now,
        ));

        Ok(saved)
    }

    // READ-SIDE DERIVATIONS

    pub fn balances_for_group(&self, group: &Group) -> Vec<Balance> {
        debug!("Calculating balances for group {}", group.id);
        let members = self.storage.list_members(group.id);
        let expenses = self.storage.list_expenses(group.id);
        balance::calculate_balances(&members, &expenses)
    }

    pub fn category_totals_for_group(&self, group: &Group) -> Vec<CategoryTotal> {
        debug!("Calculating category totals for group {}", group.id);
        let expenses = self.storage.list_expenses(group.id);
        let categories = self.storage.list_categories();
        report::category_totals(&expenses, &categories)
    }

    // VALIDATION

    /// Enforces the allocation invariants before anything is written: every
    /// member belongs to the group and appears once, amounts are
    /// non-negative and sum to the expense amount within tolerance.
    /// Near-zero rows are pruned, not persisted.
    fn check_allocations(
        &self,
        group_id: Uuid,
        amount: f64,
        allocations: Vec<Allocation>,
    ) -> Result<Vec<Allocation>, SplitbookError> {
        if amount <= 0.0 {
            warn!("Rejecting non-positive expense amount {}", amount);
            return Err(SplitbookError::NonPositiveAmount(amount));
        }

        for (i, alloc) in allocations.iter().enumerate() {
            if alloc.amount < 0.0 {
                warn!("Negative allocation for member {}", alloc.member_id);
                return Err(SplitbookError::NegativeAllocation(alloc.member_id));
            }
            if !self.storage.is_group_member(group_id, alloc.member_id) {
                warn!(
                    "Allocated member {} not in group {}",
                    alloc.member_id, group_id
                );
                return Err(SplitbookError::NotGroupMember(alloc.member_id));
            }
            if allocations[..i].iter().any(|a| a.member_id == alloc.member_id) {
                warn!("Member {} allocated twice", alloc.member_id);
                return Err(SplitbookError::DuplicateAllocationMember(alloc.member_id));
            }
        }

        let allocated: f64 = allocations.iter().map(|a| a.amount).sum();
        if (allocated - amount).abs() > SPLIT_TOLERANCE {
            warn!(
                "Allocations sum {} does not match amount {}",
                allocated, amount
            );
            return Err(SplitbookError::UnbalancedAllocations { amount, allocated });
        }

        let pruned: Vec<Allocation> = allocations
            .into_iter()
            .filter(|a| is_involved_amount(a.amount))
            .collect();
        if pruned.is_empty() {
            warn!("Expense in group {} has no real allocations", group_id);
            return Err(SplitbookError::EmptyAllocations);
        }
        Ok(pruned)
    }
}
