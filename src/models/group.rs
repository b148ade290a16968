use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Individual,
    Family,
    Group,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    /// ISO currency code all of the group's amounts are denominated in.
    pub currency: String,
    pub kind: GroupKind,
    pub created_at: DateTime<Utc>,
}
