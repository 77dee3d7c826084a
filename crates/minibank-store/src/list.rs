use std::fmt;

use minibank_types::{Account, AccountNumber, Result};

use crate::store::AccountStore;

struct Node {
    account: Account,
    next: Option<Box<Node>>,
}

/// Unbounded store backed by an owned singly linked chain.
/// New accounts are linked in at the head, so creation is O(1) without a tail
/// pointer and iteration runs newest first; lookup walks the chain and is O(n).
#[derive(Default)]
pub struct ListStore {
    head: Option<Box<Node>>,
    len: usize,
    next_number: u64,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn iter(&self) -> impl Iterator<Item = &Account> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.account)
    }
}

// Summarised: a derived impl would recurse once per node
impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("len", &self.len)
            .field("next_number", &self.next_number)
            .finish_non_exhaustive()
    }
}

impl AccountStore for ListStore {
    fn create_account(&mut self, owner: &str) -> Result<AccountNumber> {
        let number = AccountNumber::new(self.next_number);
        let node = Box::new(Node {
            account: Account::open(number, owner),
            next: self.head.take(),
        });
        self.head = Some(node);
        self.next_number += 1;
        self.len += 1;
        Ok(number)
    }

    fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.iter().find(|a| a.number() == number)
    }

    fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.account.number() == number {
                return Some(&mut node.account);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn next_number(&self) -> AccountNumber {
        AccountNumber::new(self.next_number)
    }

    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_> {
        Box::new(self.iter())
    }
}

impl Drop for ListStore {
    // Unlink node by node so long chains don't recurse through Box drops
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minibank_types::Amount;

    #[test]
    fn test_numbers_are_dense_from_zero() {
        let mut store = ListStore::new();
        assert_eq!(store.create_account("Charlie").unwrap(), AccountNumber::new(0));
        assert_eq!(store.create_account("Dora").unwrap(), AccountNumber::new(1));
        assert_eq!(store.create_account("Emil").unwrap(), AccountNumber::new(2));
        assert_eq!(store.len(), 3);
        assert_eq!(store.capacity(), None);
    }

    #[test]
    fn test_find_every_position() {
        let mut store = ListStore::new();
        for owner in ["a", "b", "c", "d"] {
            store.create_account(owner).unwrap();
        }

        for (i, owner) in ["a", "b", "c", "d"].iter().enumerate() {
            let account = store.find_account(AccountNumber::new(i as u64)).unwrap();
            assert_eq!(account.owner(), *owner);
        }
        assert!(store.find_account(AccountNumber::new(4)).is_none());
    }

    #[test]
    fn test_empty_store_lookup() {
        let mut store = ListStore::new();
        assert!(store.find_account(AccountNumber::new(0)).is_none());
        assert!(store.find_account_mut(AccountNumber::new(0)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_single_element_miss() {
        // A one-node chain must not report its only node for a different number
        let mut store = ListStore::new();
        store.create_account("only").unwrap();
        assert!(store.find_account(AccountNumber::new(7)).is_none());
    }

    #[test]
    fn test_accounts_newest_first() {
        let mut store = ListStore::new();
        for owner in ["x", "y", "z"] {
            store.create_account(owner).unwrap();
        }
        let owners: Vec<&str> = store.accounts().map(|a| a.owner()).collect();
        assert_eq!(owners, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_mutation_through_lookup() {
        let mut store = ListStore::new();
        store.create_account("a").unwrap();
        let n = store.create_account("b").unwrap();

        store
            .find_account_mut(n)
            .unwrap()
            .credit(Amount::from_units(200))
            .unwrap();

        assert_eq!(store.find_account(n).unwrap().balance(), Amount::from_units(200));
        assert_eq!(
            store.find_account(AccountNumber::new(0)).unwrap().balance(),
            Amount::ZERO
        );
    }

    #[test]
    fn test_long_chain_drops() {
        let mut store = ListStore::new();
        for _ in 0..200_000 {
            store.create_account("bulk").unwrap();
        }
        assert_eq!(store.len(), 200_000);
        drop(store);
    }

    #[test]
    fn test_long_chain_debug() {
        let mut store = ListStore::new();
        for _ in 0..200_000 {
            store.create_account("bulk").unwrap();
        }

        let printed = format!("{:?}", store);
        assert_eq!(printed, "ListStore { len: 200000, next_number: 200000, .. }");
    }
}
