use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use minibank_types::{AccountNumber, Amount, LedgerError, Result};

use crate::ledger::Ledger;
use crate::transfer::{Counterparty, TransferOutcome};

static NEXT_LEDGER_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique ledger identity; gives a total order for lock acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerId(u64);

impl LedgerId {
    fn next() -> Self {
        LedgerId(NEXT_LEDGER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LedgerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ledger-{}", self.0)
    }
}

/// A ledger behind a mutex, shareable across threads.
/// Clones refer to the same ledger.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    id: LedgerId,
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        SharedLedger {
            id: LedgerId::next(),
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn id(&self) -> LedgerId {
        self.id
    }

    /// Exclusive access for the lifetime of the guard
    pub fn lock(&self) -> Result<MutexGuard<'_, Ledger>> {
        self.inner
            .lock()
            .map_err(|e| LedgerError::LockPoisoned(format!("{}: {}", self.id, e)))
    }

    /// Run `f` with exclusive access to the ledger
    pub fn with<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> Result<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// Transfer between two shared ledgers (or within one).
    ///
    /// Both ledgers stay locked for the whole debit/credit/compensate sequence,
    /// so no other caller sees the intermediate state. Locks are taken in
    /// ascending `LedgerId` order regardless of transfer direction.
    pub fn transfer_between(
        source: &SharedLedger,
        from: AccountNumber,
        amount: Amount,
        target: &SharedLedger,
        dest: AccountNumber,
    ) -> Result<TransferOutcome> {
        if source.id == target.id {
            let mut ledger = source.lock()?;
            return ledger.transfer(from, amount, Counterparty::Local, dest);
        }

        let source_first = source.id < target.id;
        let (first, second) = if source_first {
            (source, target)
        } else {
            (target, source)
        };
        let mut first_guard = first.lock()?;
        let mut second_guard = second.lock()?;

        let (src, dst) = if source_first {
            (&mut *first_guard, &mut *second_guard)
        } else {
            (&mut *second_guard, &mut *first_guard)
        };
        src.transfer(from, amount, Counterparty::Peer(dst), dest)
    }
}
