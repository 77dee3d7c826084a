use minibank_types::{Account, AccountNumber, LedgerError, Result};

use crate::store::AccountStore;

/// Slots reserved by `ArrayStore::new`
pub const DEFAULT_ARRAY_CAPACITY: usize = 1000;

// Larger capacities are still enforced, but the slots beyond this are allocated on demand
const MAX_PRERESERVED_SLOTS: usize = 1 << 16;

/// Fixed-capacity store indexed directly by account number.
/// Slots are filled densely from 0, so the fill level doubles as the number counter
/// and lookup is a bounds-checked index, independent of population size.
#[derive(Debug, Clone)]
pub struct ArrayStore {
    slots: Vec<Account>,
    capacity: usize,
}

impl ArrayStore {
    /// Create a store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARRAY_CAPACITY)
    }

    /// Create a store holding at most `capacity` accounts
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayStore {
            slots: Vec::with_capacity(capacity.min(MAX_PRERESERVED_SLOTS)),
            capacity,
        }
    }

    fn slot(&self, number: AccountNumber) -> Option<usize> {
        number.as_index().filter(|&i| i < self.slots.len())
    }
}

impl Default for ArrayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for ArrayStore {
    fn create_account(&mut self, owner: &str) -> Result<AccountNumber> {
        if self.slots.len() >= self.capacity {
            tracing::warn!(capacity = self.capacity, owner, "array store is full");
            return Err(LedgerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let number = self.next_number();
        self.slots.push(Account::open(number, owner));
        Ok(number)
    }

    fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.slot(number).map(|i| &self.slots[i])
    }

    fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        let i = self.slot(number)?;
        self.slots.get_mut(i)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn next_number(&self) -> AccountNumber {
        AccountNumber::new(self.slots.len() as u64)
    }

    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_> {
        Box::new(self.slots.iter())
    }
}
