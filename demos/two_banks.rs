use minibank_ledger::{AccountNumber, Amount, Counterparty, Ledger, LedgerConfig, TransferOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows every ledger mutation
    minibank_demos::init_tracing("info");

    let mut bank_a = Ledger::from_config(&LedgerConfig::from_json(
        r#"{"name": "TestBank", "store": {"kind": "array"}}"#,
    )?)?;
    let mut bank_b = Ledger::from_config(&LedgerConfig::from_json(
        r#"{"name": "TestBank2", "store": {"kind": "list"}}"#,
    )?)?;

    let beate = bank_a.create_account("Beate")?;
    let harald = bank_a.create_account("Harald")?;
    let charlie = bank_b.create_account("Charlie")?;
    tracing::info!(%beate, %harald, %charlie, "accounts opened");

    bank_a.deposit(beate, Amount::from_units(150))?;
    bank_a.transfer(beate, Amount::from_units(40), Counterparty::Local, harald)?;

    bank_b.deposit(charlie, Amount::from_units(200))?;
    bank_b.transfer(charlie, Amount::from_units(30), Counterparty::Peer(&mut bank_a), beate)?;

    match bank_a.transfer(harald, Amount::from_units(1000), Counterparty::Local, beate) {
        Ok(outcome) => tracing::warn!(?outcome, "overdraw unexpectedly accepted"),
        Err(e) => tracing::info!(error = %e, "overdraw rejected"),
    }

    if let TransferOutcome::Compensated { reason } =
        bank_b.transfer(charlie, Amount::from_units(10), Counterparty::Local, AccountNumber::new(99))?
    {
        tracing::info!(%reason, "transfer to unknown account compensated");
    }

    for (bank, ledger) in [("A", &bank_a), ("B", &bank_b)] {
        for account in ledger.accounts() {
            println!(
                "bank {} ({}) {} {:<8} {}",
                bank,
                ledger.store_kind(),
                account.number(),
                account.owner(),
                account.balance()
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&bank_a.accounts().collect::<Vec<_>>())?);

    Ok(())
}
