use minibank_types::{Account, AccountNumber, Result};

/// Storage contract for a collection of accounts.
/// The store owns every account; callers only borrow them through lookups.
/// Account numbers are assigned by the store, start at 0 and are never reused.
pub trait AccountStore: std::fmt::Debug + Send {
    /// Open a new zero-balance account and return its number
    fn create_account(&mut self, owner: &str) -> Result<AccountNumber>;

    /// Look up an account by exact number
    fn find_account(&self, number: AccountNumber) -> Option<&Account>;

    /// Look up an account for mutation
    fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account>;

    /// Number of accounts created so far
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of accounts, or `None` when unbounded
    fn capacity(&self) -> Option<usize>;

    /// Number the next created account will receive
    fn next_number(&self) -> AccountNumber;

    /// Every account exactly once; the order is up to the store
    /// (creation order for `ArrayStore`, newest first for `ListStore`)
    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_>;

    /// Check whether an account exists
    fn contains(&self, number: AccountNumber) -> bool {
        self.find_account(number).is_some()
    }
}
