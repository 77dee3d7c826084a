//! Boolean and zero-sentinel surface matching the original bank interface.
//!
//! These calls collapse distinct failures into one signal: `take_money` and
//! `balance_or_zero` return 0 both for a missing account and for a real zero
//! (or insufficient) balance, and `transfer_money` reports `true` for a
//! transfer that was compensated because the destination did not exist.
//! Use the `Result`-returning methods on [`Ledger`] to tell these cases apart.

use minibank_types::{AccountNumber, Amount};

use crate::ledger::Ledger;
use crate::transfer::Counterparty;

pub trait LegacyBank {
    /// `true` iff the account exists and was credited
    fn put_money(&mut self, number: AccountNumber, amount: Amount) -> bool;

    /// The amount taken, or 0 if the account is missing or short of funds
    fn take_money(&mut self, number: AccountNumber, amount: Amount) -> Amount;

    /// The balance, or 0 if the account is missing
    fn balance_or_zero(&self, number: AccountNumber) -> Amount;

    /// `true` iff the source account existed and was debited,
    /// whether or not the destination was credited
    fn transfer_money(
        &mut self,
        from: AccountNumber,
        amount: Amount,
        to: Counterparty<'_>,
        dest: AccountNumber,
    ) -> bool;
}

impl LegacyBank for Ledger {
    fn put_money(&mut self, number: AccountNumber, amount: Amount) -> bool {
        self.deposit(number, amount).is_ok()
    }

    fn take_money(&mut self, number: AccountNumber, amount: Amount) -> Amount {
        self.withdraw(number, amount).unwrap_or(Amount::ZERO)
    }

    fn balance_or_zero(&self, number: AccountNumber) -> Amount {
        self.balance(number).unwrap_or(Amount::ZERO)
    }

    fn transfer_money(
        &mut self,
        from: AccountNumber,
        amount: Amount,
        to: Counterparty<'_>,
        dest: AccountNumber,
    ) -> bool {
        self.transfer(from, amount, to, dest).is_ok()
    }
}
