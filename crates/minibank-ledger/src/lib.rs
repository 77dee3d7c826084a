mod config;
mod ledger;
mod shared;
mod transfer;
#[cfg(feature = "legacy")]
mod legacy;

pub use config::LedgerConfig;
pub use ledger::Ledger;
pub use shared::{LedgerId, SharedLedger};
pub use transfer::{Counterparty, TransferOutcome};
#[cfg(feature = "legacy")]
pub use legacy::LegacyBank;

pub use minibank_store::{AccountStore, ArrayStore, ListStore, StoreKind, DEFAULT_ARRAY_CAPACITY};
pub use minibank_types::{Account, AccountNumber, Amount, ErrorKind, LedgerError, Result};
