use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use minibank_types::LedgerError;

use crate::array::{ArrayStore, DEFAULT_ARRAY_CAPACITY};
use crate::list::ListStore;
use crate::store::AccountStore;

/// Which backing structure a ledger keeps its accounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreKind {
    /// Fixed capacity, O(1) lookup
    Array {
        #[serde(default = "default_capacity")]
        capacity: usize,
    },
    /// Unbounded, O(n) lookup
    List,
}

fn default_capacity() -> usize {
    DEFAULT_ARRAY_CAPACITY
}

impl StoreKind {
    /// Array store with the default capacity
    pub const fn array() -> Self {
        StoreKind::Array {
            capacity: DEFAULT_ARRAY_CAPACITY,
        }
    }

    /// Construct an empty store of this kind
    pub fn build(&self) -> Box<dyn AccountStore> {
        match *self {
            StoreKind::Array { capacity } => Box::new(ArrayStore::with_capacity(capacity)),
            StoreKind::List => Box::new(ListStore::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreKind::Array { .. } => "array",
            StoreKind::List => "list",
        }
    }
}

impl Default for StoreKind {
    fn default() -> Self {
        Self::array()
    }
}

impl FromStr for StoreKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(StoreKind::array()),
            "list" => Ok(StoreKind::List),
            _ => Err(LedgerError::UnknownStoreKind(s.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Array { capacity } => write!(f, "array({})", capacity),
            StoreKind::List => write!(f, "list"),
        }
    }
}
