use crate::error::SplitbookError;
use crate::models::{Category, Expense, Group, Member};
use crate::storage::Storage;
use std::collections::HashMap;
use uuid::Uuid;

pub struct InMemoryStorage {
    groups: HashMap<Uuid, Group>,
    members: HashMap<Uuid, Member>,
    categories: HashMap<Uuid, Category>,
    expenses: HashMap<Uuid, Expense>,
    // Insertion order per group, so expense listings are stable.
    expense_order: Vec<Uuid>,
    member_order: Vec<Uuid>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            groups: HashMap::new(),
            members: HashMap::new(),
            categories: HashMap::new(),
            expenses: HashMap::new(),
            expense_order: Vec::new(),
            member_order: Vec::new(),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStorage {
    fn create_group(&mut self, group: Group) -> Result<Group, SplitbookError> {
        self.groups.insert(group.id, group.clone());
        Ok(group)
    }

    fn get_group(&self, group_id: Uuid) -> Option<Group> {
        self.groups.get(&group_id).cloned()
    }

    fn list_groups(&self) -> Vec<Group> {
        self.groups.values().cloned().collect()
    }

    fn create_member(&mut self, member: Member) -> Result<Member, SplitbookError> {
        if !self.groups.contains_key(&member.group_id) {
            return Err(SplitbookError::GroupNotFound(member.group_id));
        }
        self.member_order.push(member.id);
        self.members.insert(member.id, member.clone());
        Ok(member)
    }

    fn get_member(&self, member_id: Uuid) -> Option<Member> {
        self.members.get(&member_id).cloned()
    }

    fn list_members(&self, group_id: Uuid) -> Vec<Member> {
        self.member_order
            .iter()
            .filter_map(|id| self.members.get(id))
            .filter(|m| m.group_id == group_id)
            .cloned()
            .collect()
    }

    fn is_group_member(&self, group_id: Uuid, member_id: Uuid) -> bool {
        self.members
            .get(&member_id)
            .is_some_and(|m| m.group_id == group_id)
    }

    fn create_category(&mut self, category: Category) -> Result<Category, SplitbookError> {
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    fn list_categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    fn create_expense(&mut self, expense: Expense) -> Result<Expense, SplitbookError> {
        self.expense_order.push(expense.id);
        self.expenses.insert(expense.id, expense.clone());
        Ok(expense)
    }

    fn update_expense(&mut self, expense: Expense) -> Result<Expense, SplitbookError> {
        if !self.expenses.contains_key(&expense.id) {
            return Err(SplitbookError::ExpenseNotFound(expense.id));
        }
        // Whole-record replace: the allocation set goes with it.
        self.expenses.insert(expense.id, expense.clone());
        Ok(expense)
    }

    fn get_expense(&self, expense_id: Uuid) -> Option<Expense> {
        self.expenses.get(&expense_id).cloned()
    }

    fn list_expenses(&self, group_id: Uuid) -> Vec<Expense> {
        self.expense_order
            .iter()
            .filter_map(|id| self.expenses.get(id))
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect()
    }
}
