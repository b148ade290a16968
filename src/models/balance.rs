use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member's net position, derived on demand from the expense history and
/// never stored. Positive means the group owes them, negative means they owe
/// the group.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub member_id: Uuid,
    pub amount: f64,
}

/// Per-category spend, derived for reporting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
}
