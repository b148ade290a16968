use uuid::Uuid;

use crate::error::SplitbookError;
use crate::models::*;

/// Persistence collaborator. Implementations must make each write atomic:
/// in particular `update_expense` replaces the expense row together with its
/// embedded allocation set in one operation, so an edit can never leave
/// partial or duplicate allocations behind.
pub trait Storage {
    fn create_group(&mut self, group: Group) -> Result<Group, SplitbookError>;
    fn get_group(&self, group_id: Uuid) -> Option<Group>;
    fn list_groups(&self) -> Vec<Group>;

    fn create_member(&mut self, member: Member) -> Result<Member, SplitbookError>;
    fn get_member(&self, member_id: Uuid) -> Option<Member>;
    fn list_members(&self, group_id: Uuid) -> Vec<Member>;
    fn is_group_member(&self, group_id: Uuid, member_id: Uuid) -> bool;

    fn create_category(&mut self, category: Category) -> Result<Category, SplitbookError>;
    fn list_categories(&self) -> Vec<Category>;

    fn create_expense(&mut self, expense: Expense) -> Result<Expense, SplitbookError>;
    fn update_expense(&mut self, expense: Expense) -> Result<Expense, SplitbookError>;
    fn get_expense(&self, expense_id: Uuid) -> Option<Expense>;
    fn list_expenses(&self, group_id: Uuid) -> Vec<Expense>;
}

pub mod in_memory;
