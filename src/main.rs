use chrono::NaiveDate;
use log::info;
use splitbook::amounts::round_cents;
use splitbook::config::CONFIG;
use splitbook::models::GroupKind;
use splitbook::{InMemoryAuditLogger, InMemoryStorage, LedgerService, SplitMethod, SplitSession};

fn main() -> Result<(), splitbook::SplitbookError> {
    env_logger::Builder::new()
        .parse_filters(&CONFIG.log_level)
        .init();

    let mut storage = InMemoryStorage::new();
    let mut audit = InMemoryAuditLogger::new();
    let mut service = LedgerService::new(&mut storage, &mut audit);

    let group = service.create_group(
        "Flat 12".to_string(),
        CONFIG.default_currency.clone(),
        GroupKind::Group,
    )?;
    let alice = service.add_member(&group, "Alice".to_string())?;
    let bob = service.add_member(&group, "Bob".to_string())?;
    let chloe = service.add_member(&group, "Chloe".to_string())?;
    let members = [alice.clone(), bob.clone(), chloe.clone()];

    let groceries = service.create_category("Groceries".to_string())?;
    let rent = service.create_category("Rent".to_string())?;

    // Dinner, split three ways.
    let mut session = SplitSession::new(100.0, &members);
    assert!(session.is_valid());
    service.create_expense(
        &group,
        alice.id,
        groceries.id,
        session.total_amount(),
        NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date"),
        "Dinner".to_string(),
        session.finalize(),
    )?;

    // Rent, custom shares; Chloe's room is bigger.
    session = SplitSession::new(900.0, &members);
    session.set_split_method(SplitMethod::Custom);
    session.update_allocation(alice.id, "250");
    session.update_allocation(bob.id, "250");
    session.update_allocation(chloe.id, "400");
    assert!(session.is_valid());
    service.create_expense(
        &group,
        bob.id,
        rent.id,
        session.total_amount(),
        NaiveDate::from_ymd_opt(2026, 8, 3).expect("valid date"),
        "August rent".to_string(),
        session.finalize(),
    )?;

    println!("Balances for {}:", group.name);
    for balance in service.balances_for_group(&group) {
        let name = members
            .iter()
            .find(|m| m.id == balance.member_id)
            .map(|m| m.name.as_str())
            .unwrap_or("?");
        println!(
            "  {:<8} {:>8.2} {}",
            name,
            round_cents(balance.amount),
            group.currency
        );
    }

    println!("Spending by category:");
    for total in service.category_totals_for_group(&group) {
        println!("  {:<12} {:>8.2}", total.name, round_cents(total.value));
    }

    info!("Recorded {} audit entries", audit.entries().len());
    Ok(())
}
