use super::{member_of, test_group};
use crate::models::Allocation;
use crate::split::{SplitMethod, SplitSession};

#[test]
fn equal_split_three_ways() {
    let group = test_group();
    let pool = [
        member_of(&group, "Alice"),
        member_of(&group, "Bob"),
        member_of(&group, "Chloe"),
    ];

    let session = SplitSession::new(100.0, &pool);

    assert_eq!(session.method(), SplitMethod::Equal);
    for member in &pool {
        let share = session.amount_for(member.id);
        assert!((share - 100.0 / 3.0).abs() < 1e-9);
    }
    let totals = session.totals();
    assert!(totals.remaining.abs() < 0.01);
    assert!(session.is_valid());

    let rows = session.finalize();
    assert_eq!(rows.len(), 3);
    let sum: f64 = rows.iter().map(|a| a.amount).sum();
    assert!((sum - 100.0).abs() < 0.01);
}

#[test]
fn equal_split_excludes_uninvolved_member() {
    let group = test_group();
    let pool = [
        member_of(&group, "Alice"),
        member_of(&group, "Bob"),
        member_of(&group, "Chloe"),
    ];

    let mut session = SplitSession::new(50.0, &pool);
    session.toggle_involvement(pool[2].id);

    assert_eq!(session.amount_for(pool[0].id), 25.0);
    assert_eq!(session.amount_for(pool[1].id), 25.0);
    assert_eq!(session.amount_for(pool[2].id), 0.0);
    assert!(session.is_valid());

    let rows = session.finalize();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|a| a.member_id != pool[2].id));
}

#[test]
fn custom_split_mismatch_is_invalid() {
    let group = test_group();
    let pool = [
        member_of(&group, "Alice"),
        member_of(&group, "Bob"),
        member_of(&group, "Chloe"),
    ];

    let mut session = SplitSession::new(100.0, &pool);
    session.toggle_involvement(pool[2].id);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(pool[0].id, "40");
    session.update_allocation(pool[1].id, "40");

    let totals = session.totals();
    assert!((totals.allocated - 80.0).abs() < 1e-9);
    assert!((totals.remaining - 20.0).abs() < 1e-9);
    assert!(!session.is_valid());
}

#[test]
fn edit_mode_reconstructs_custom_split_exactly() {
    let group = test_group();
    let pool = [
        member_of(&group, "Alice"),
        member_of(&group, "Bob"),
        member_of(&group, "Chloe"),
    ];
    let prior = vec![
        Allocation {
            member_id: pool[0].id,
            amount: 70.0,
        },
        Allocation {
            member_id: pool[1].id,
            amount: 30.0,
        },
    ];

    let session = SplitSession::from_allocations(100.0, &pool, &prior);

    assert_eq!(session.method(), SplitMethod::Custom);
    assert!(session.involved().contains(&pool[0].id));
    assert!(session.involved().contains(&pool[1].id));
    assert!(!session.involved().contains(&pool[2].id));
    assert_eq!(session.amount_for(pool[0].id), 70.0);
    assert_eq!(session.amount_for(pool[1].id), 30.0);
    assert_eq!(session.amount_for(pool[2].id), 0.0);
    assert!(session.is_valid());
}

#[test]
fn edit_mode_detects_equal_split() {
    let group = test_group();
    let pool = [
        member_of(&group, "Alice"),
        member_of(&group, "Bob"),
        member_of(&group, "Chloe"),
    ];
    let share = 100.0 / 3.0;
    let prior: Vec<Allocation> = pool
        .iter()
        .map(|m| Allocation {
            member_id: m.id,
            amount: share,
        })
        .collect();

    let session = SplitSession::from_allocations(100.0, &pool, &prior);

    assert_eq!(session.method(), SplitMethod::Equal);
    // Recomputing the equal split reproduces the stored amounts exactly.
    for member in &pool {
        assert_eq!(session.amount_for(member.id), share);
    }
}

#[test]
fn empty_prior_allocations_behave_as_create_mode() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let session = SplitSession::from_allocations(80.0, &pool, &[]);

    assert_eq!(session.method(), SplitMethod::Equal);
    assert_eq!(session.involved().len(), 2);
    assert_eq!(session.amount_for(pool[0].id), 40.0);
}

#[test]
fn switching_to_custom_keeps_equal_shares_as_starting_point() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(100.0, &pool);
    session.set_split_method(SplitMethod::Custom);

    assert_eq!(session.method(), SplitMethod::Custom);
    assert_eq!(session.amount_for(pool[0].id), 50.0);
    assert_eq!(session.amount_for(pool[1].id), 50.0);
    assert!(session.is_valid());
}

#[test]
fn switching_back_to_equal_discards_custom_amounts() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(100.0, &pool);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(pool[0].id, "70");
    session.update_allocation(pool[1].id, "30");
    session.set_split_method(SplitMethod::Equal);

    assert_eq!(session.amount_for(pool[0].id), 50.0);
    assert_eq!(session.amount_for(pool[1].id), 50.0);
}

#[test]
fn setting_same_method_twice_is_idempotent() {
    let group = test_group();
    let pool = [
        member_of(&group, "Alice"),
        member_of(&group, "Bob"),
        member_of(&group, "Chloe"),
    ];

    let mut session = SplitSession::new(100.0, &pool);
    let before: Vec<(uuid::Uuid, f64)> = session.allocations().collect();
    session.set_split_method(SplitMethod::Equal);
    session.set_split_method(SplitMethod::Equal);
    let after: Vec<(uuid::Uuid, f64)> = session.allocations().collect();

    assert_eq!(before, after);
}

#[test]
fn invalid_custom_input_clamps_to_zero() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(100.0, &pool);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(pool[0].id, "not a number");
    session.update_allocation(pool[1].id, "-5");

    assert_eq!(session.amount_for(pool[0].id), 0.0);
    assert_eq!(session.amount_for(pool[1].id), 0.0);
    assert!(!session.is_valid());

    session.update_allocation(pool[0].id, " 60.50 ");
    assert_eq!(session.amount_for(pool[0].id), 60.5);
}

#[test]
fn update_allocation_is_ignored_under_equal_split() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(100.0, &pool);
    session.update_allocation(pool[0].id, "99");

    assert_eq!(session.amount_for(pool[0].id), 50.0);
}

#[test]
fn finalize_prunes_near_zero_amounts() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(100.0, &pool);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(pool[0].id, "100");
    session.update_allocation(pool[1].id, "0.004");

    assert!(session.is_valid());
    let rows = session.finalize();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].member_id, pool[0].id);
}

#[test]
fn finalize_excludes_uninvolved_members_with_amounts() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(50.0, &pool);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(pool[0].id, "50");
    session.update_allocation(pool[1].id, "25");
    // Bob drops out but his typed amount stays in the session.
    session.toggle_involvement(pool[1].id);

    assert!(session.is_valid());
    let rows = session.finalize();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].member_id, pool[0].id);
    assert_eq!(session.amount_for(pool[1].id), 25.0);
}

#[test]
fn empty_involvement_set_is_invalid() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(100.0, &pool);
    session.toggle_involvement(pool[0].id);
    session.toggle_involvement(pool[1].id);

    assert_eq!(session.amount_for(pool[0].id), 0.0);
    assert!(!session.is_valid());
    assert!(session.finalize().is_empty());
}

#[test]
fn tolerance_boundaries_hold() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    // Remaining strictly inside 0.01 is committable, at 0.02 it is not.
    let mut session = SplitSession::new(100.0, &pool);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(pool[0].id, "60");
    session.update_allocation(pool[1].id, "39.995");
    assert!(session.is_valid());
    session.update_allocation(pool[1].id, "39.98");
    assert!(!session.is_valid());

    // 0.006 is a real share and survives finalize, 0.004 does not.
    session.update_allocation(pool[0].id, "100");
    session.update_allocation(pool[1].id, "0.006");
    assert_eq!(session.finalize().len(), 2);
    session.update_allocation(pool[1].id, "0.004");
    assert_eq!(session.finalize().len(), 1);
}

#[test]
fn non_positive_total_is_invalid() {
    let group = test_group();
    let pool = [member_of(&group, "Alice")];

    let mut session = SplitSession::new(100.0, &pool);
    session.set_total_amount(0.0);
    assert!(!session.is_valid());

    session.set_total_amount(-10.0);
    assert_eq!(session.total_amount(), 0.0);

    session.set_total_amount(f64::NAN);
    assert_eq!(session.total_amount(), 0.0);
}

#[test]
fn toggling_unknown_member_is_ignored() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];
    let stranger = member_of(&group, "Mallory");

    let mut session = SplitSession::new(100.0, &pool);
    session.toggle_involvement(stranger.id);

    assert_eq!(session.involved().len(), 2);
    assert!(!session.involved().contains(&stranger.id));
}

#[test]
fn reset_pool_discards_stale_allocations() {
    let group = test_group();
    let old_pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];
    let new_pool = [member_of(&group, "Dana"), member_of(&group, "Eve")];

    let mut session = SplitSession::new(100.0, &old_pool);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(old_pool[0].id, "80");
    session.reset_pool(&new_pool);

    assert_eq!(session.method(), SplitMethod::Equal);
    assert_eq!(session.involved().len(), 2);
    assert!(!session.involved().contains(&old_pool[0].id));
    assert_eq!(session.amount_for(old_pool[0].id), 0.0);
    assert_eq!(session.amount_for(new_pool[0].id), 50.0);
    assert_eq!(session.amount_for(new_pool[1].id), 50.0);
}

#[test]
fn changing_total_recomputes_equal_shares() {
    let group = test_group();
    let pool = [member_of(&group, "Alice"), member_of(&group, "Bob")];

    let mut session = SplitSession::new(100.0, &pool);
    session.set_total_amount(30.0);

    assert_eq!(session.amount_for(pool[0].id), 15.0);
    assert_eq!(session.amount_for(pool[1].id), 15.0);
    assert!(session.is_valid());
}
