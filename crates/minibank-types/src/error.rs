use crate::{AccountNumber, Amount};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("Insufficient funds: account={account}, balance={balance}, requested={requested}")]
    InsufficientFunds {
        account: AccountNumber,
        balance: Amount,
        requested: Amount,
    },

    #[error("Capacity exceeded: store holds at most {capacity} accounts")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown store kind: {0}")]
    UnknownStoreKind(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Coarse failure category, for callers that branch on the cause rather than the details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InsufficientFunds,
    CapacityExceeded,
    InvalidArgument,
    Internal,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::AccountNotFound(_) => ErrorKind::NotFound,
            LedgerError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            LedgerError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            LedgerError::InvalidAmount(_)
            | LedgerError::UnknownStoreKind(_)
            | LedgerError::Config(_) => ErrorKind::InvalidArgument,
            LedgerError::LockPoisoned(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
