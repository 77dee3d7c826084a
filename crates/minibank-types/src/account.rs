use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, Result};
use crate::Amount;

/// Account number, dense and sequential within the store that assigned it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountNumber(u64);

impl AccountNumber {
    pub const fn new(n: u64) -> Self {
        AccountNumber(n)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Position in a dense store, if it fits the platform's index type
    pub fn as_index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AccountNumber {
    fn from(n: u64) -> Self {
        AccountNumber(n)
    }
}

/// A named balance record. Number and owner are fixed at opening;
/// the balance only moves through `credit` and `debit` and never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    owner: String,
    balance: Amount,
}

impl Account {
    /// Open an account with a zero balance
    pub fn open(number: AccountNumber, owner: impl Into<String>) -> Self {
        Account {
            number,
            owner: owner.into(),
            balance: Amount::ZERO,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Add funds to the balance
    pub fn credit(&mut self, amount: Amount) -> Result<()> {
        let amount = amount.ensure_non_negative("credit")?;
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    /// Remove funds from the balance; leaves it untouched when funds are short
    pub fn debit(&mut self, amount: Amount) -> Result<()> {
        let amount = amount.ensure_non_negative("debit")?;
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                account: self.number,
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance = self.balance - amount;
        Ok(())
    }
}
