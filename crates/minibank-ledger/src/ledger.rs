use minibank_store::{AccountStore, StoreKind};
use minibank_types::{Account, AccountNumber, Amount, LedgerError, Result};

use crate::config::LedgerConfig;

/// A named collection of accounts over one exclusively owned store.
/// The store kind is fixed at construction.
#[derive(Debug)]
pub struct Ledger {
    name: String,
    kind: StoreKind,
    store: Box<dyn AccountStore>,
}

impl Ledger {
    /// Create an empty ledger backed by a store of the given kind
    pub fn new(name: impl Into<String>, kind: StoreKind) -> Self {
        let name = name.into();
        tracing::debug!(ledger = %name, store = %kind, "ledger created");
        Ledger {
            name,
            kind,
            store: kind.build(),
        }
    }

    /// Create an empty ledger from a validated configuration
    pub fn from_config(config: &LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.name.clone(), config.store))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store_kind(&self) -> StoreKind {
        self.kind
    }

    /// Number of accounts in this ledger
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Open a zero-balance account for `owner`
    pub fn create_account(&mut self, owner: &str) -> Result<AccountNumber> {
        let number = self.store.create_account(owner)?;
        tracing::debug!(ledger = %self.name, account = %number, owner, "account created");
        Ok(number)
    }

    /// Credit `amount` to an account
    pub fn deposit(&mut self, number: AccountNumber, amount: Amount) -> Result<()> {
        let amount = amount.ensure_non_negative("deposit")?;
        self.account_mut(number)?.credit(amount)?;
        tracing::debug!(ledger = %self.name, account = %number, %amount, "deposit");
        Ok(())
    }

    /// Debit `amount` from an account and return the amount taken
    pub fn withdraw(&mut self, number: AccountNumber, amount: Amount) -> Result<Amount> {
        let amount = amount.ensure_non_negative("withdrawal")?;
        self.account_mut(number)?.debit(amount)?;
        tracing::debug!(ledger = %self.name, account = %number, %amount, "withdrawal");
        Ok(amount)
    }

    /// Current balance of an account
    pub fn balance(&self, number: AccountNumber) -> Result<Amount> {
        self.account(number)
            .map(Account::balance)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    /// Borrow an account record
    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.store.find_account(number)
    }

    /// All accounts, in the store's iteration order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.store.accounts()
    }

    /// Sum of all balances held by this ledger
    pub fn total_holdings(&self) -> Result<Amount> {
        self.store
            .accounts()
            .try_fold(Amount::ZERO, |sum, account| sum.checked_add(account.balance()))
    }

    pub(crate) fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account> {
        self.store
            .find_account_mut(number)
            .ok_or(LedgerError::AccountNotFound(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(kind: StoreKind) -> Ledger {
        Ledger::new("test", kind)
    }

    #[test]
    fn test_deposit_withdraw() {
        for kind in [StoreKind::array(), StoreKind::List] {
            let mut ledger = ledger(kind);
            let account = ledger.create_account("Beate").unwrap();

            ledger.deposit(account, Amount::from_units(1000)).unwrap();
            assert_eq!(ledger.balance(account).unwrap(), Amount::from_units(1000));

            let taken = ledger.withdraw(account, Amount::from_units(300)).unwrap();
            assert_eq!(taken, Amount::from_units(300));
            assert_eq!(ledger.balance(account).unwrap(), Amount::from_units(700));
        }
    }

    #[test]
    fn test_insufficient_balance() {
        let mut ledger = ledger(StoreKind::List);
        let account = ledger.create_account("Harald").unwrap();
        ledger.deposit(account, Amount::from_units(100)).unwrap();

        let err = ledger.withdraw(account, Amount::from_units(200)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(ledger.balance(account).unwrap(), Amount::from_units(100));
    }

    #[test]
    fn test_not_found_is_distinct_from_zero_balance() {
        let mut ledger = ledger(StoreKind::array());
        let account = ledger.create_account("Beate").unwrap();
        let missing = AccountNumber::new(7);

        assert_eq!(ledger.balance(account).unwrap(), Amount::ZERO);
        assert_eq!(
            ledger.balance(missing),
            Err(LedgerError::AccountNotFound(missing))
        );
        assert_eq!(
            ledger.withdraw(missing, Amount::from_units(1)),
            Err(LedgerError::AccountNotFound(missing))
        );
        assert_eq!(
            ledger.deposit(missing, Amount::from_units(1)),
            Err(LedgerError::AccountNotFound(missing))
        );
    }

    #[test]
    fn test_negative_amount_rejection() {
        let mut ledger = ledger(StoreKind::array());
        let account = ledger.create_account("Beate").unwrap();
        ledger.deposit(account, Amount::from_units(100)).unwrap();

        assert!(matches!(
            ledger.deposit(account, Amount::from_units(-100)),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.withdraw(account, Amount::from_units(-50)),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(ledger.balance(account).unwrap(), Amount::from_units(100));
    }

    #[test]
    fn test_capacity_exceeded_through_ledger() {
        let mut ledger = ledger(StoreKind::Array { capacity: 1 });
        ledger.create_account("a").unwrap();
        assert_eq!(
            ledger.create_account("b"),
            Err(LedgerError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_total_holdings() {
        let mut ledger = ledger(StoreKind::List);
        let a = ledger.create_account("a").unwrap();
        let b = ledger.create_account("b").unwrap();
        ledger.deposit(a, Amount::from_units(150)).unwrap();
        ledger.deposit(b, Amount::from_units(50)).unwrap();

        assert_eq!(ledger.total_holdings().unwrap(), Amount::from_units(200));
        assert_eq!(ledger.accounts().count(), 2);
    }

    #[test]
    fn test_debug_long_list_ledger() {
        let mut ledger = ledger(StoreKind::List);
        for _ in 0..200_000 {
            ledger.create_account("bulk").unwrap();
        }

        let printed = format!("{:?}", ledger);
        assert!(printed.contains("ListStore { len: 200000, next_number: 200000, .. }"));
    }

    #[test]
    fn test_store_kind_fixed() {
        let ledger = ledger(StoreKind::List);
        assert_eq!(ledger.store_kind(), StoreKind::List);
        assert_eq!(ledger.name(), "test");
        assert!(ledger.is_empty());
    }
}
