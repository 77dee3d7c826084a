mod amount;
mod account;
mod error;

pub use amount::Amount;
pub use account::{Account, AccountNumber};
pub use error::{ErrorKind, LedgerError, Result};
