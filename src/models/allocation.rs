use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member's share of its parent expense. Allocations live inside the
/// expense record and are replaced wholesale whenever the expense is edited.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Allocation {
    pub member_id: Uuid,
    pub amount: f64,
}
