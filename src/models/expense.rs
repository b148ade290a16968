use super::allocation::Allocation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub group_id: Uuid,
    /// Member who fronted the money for the whole expense.
    pub payer_id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    /// Invariant: amounts sum to `amount` within SPLIT_TOLERANCE, one entry
    /// per member, none at or below INVOLVEMENT_EPSILON.
    pub allocations: Vec<Allocation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
