mod currency_tests;
mod split_tests;

use crate::models::{Allocation, Expense, Group, GroupKind, Member};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

pub fn test_group() -> Group {
    Group {
        id: Uuid::new_v4(),
        name: "Trip".to_string(),
        currency: "USD".to_string(),
        kind: GroupKind::Group,
        created_at: Utc::now(),
    }
}

pub fn member_of(group: &Group, name: &str) -> Member {
    Member {
        id: Uuid::new_v4(),
        group_id: group.id,
        name: name.to_string(),
    }
}

pub fn expense_on(group: &Group, payer: &Member, amount: f64, shares: &[(&Member, f64)]) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        group_id: group.id,
        payer_id: payer.id,
        category_id: Uuid::new_v4(),
        amount,
        description: "test expense".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
        allocations: shares
            .iter()
            .map(|(member, amount)| Allocation {
                member_id: member.id,
                amount: *amount,
            })
            .collect(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
    }
}
