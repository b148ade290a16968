use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Serialize)]
pub enum SplitbookError {
    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(Uuid),

    /// Member with given ID not found
    #[error("Member {0} not found")]
    MemberNotFound(Uuid),

    /// Expense with given ID not found
    #[error("Expense {0} not found")]
    ExpenseNotFound(Uuid),

    /// Category with given ID not found
    #[error("Category {0} not found")]
    CategoryNotFound(Uuid),

    /// Member does not belong to the expense's group
    #[error("Member {0} is not in the group")]
    NotGroupMember(Uuid),

    /// Expense amount must be strictly positive
    #[error("Expense amount {0} is not positive")]
    NonPositiveAmount(f64),

    /// An expense must allocate its cost to at least one member
    #[error("Expense has no allocations")]
    EmptyAllocations,

    /// The same member appears more than once in an allocation set
    #[error("Member {0} allocated more than once")]
    DuplicateAllocationMember(Uuid),

    /// Allocation amounts must be non-negative
    #[error("Negative allocation for member {0}")]
    NegativeAllocation(Uuid),

    /// Allocation amounts don't add up to the expense amount
    #[error("Allocations sum to {allocated}, expected {amount}")]
    UnbalancedAllocations { amount: f64, allocated: f64 },

    /// Expense has already been deleted
    #[error("Expense {0} already deleted")]
    AlreadyDeleted(Uuid),

    /// Rate provider could not supply a conversion rate
    #[error("No conversion rate from {0} to {1}")]
    RateUnavailable(String, String),

    /// Rate provider returned a rate that cannot be used
    #[error("Invalid conversion rate {0}")]
    InvalidRate(f64),

    #[error("Storage error: {0}")]
    StorageError(String),
}
