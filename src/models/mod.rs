pub mod allocation;
pub mod audit;
pub mod balance;
pub mod category;
pub mod expense;
pub mod group;
pub mod member;

pub use allocation::Allocation;
pub use audit::{AuditAction, AuditLogEntry};
pub use balance::{Balance, CategoryTotal};
pub use category::Category;
pub use expense::Expense;
pub use group::{Group, GroupKind};
pub use member::Member;
