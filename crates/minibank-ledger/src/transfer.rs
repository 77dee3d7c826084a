use minibank_types::{AccountNumber, Amount, LedgerError, Result};

use crate::ledger::Ledger;

/// Where the credit leg of a transfer lands
#[derive(Debug)]
pub enum Counterparty<'a> {
    /// The ledger the transfer is invoked on
    Local,
    /// A different ledger instance
    Peer(&'a mut Ledger),
}

/// How a transfer ended once the source was debited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Source debited and destination credited
    Completed,
    /// The credit failed and the debit was reversed; net effect is nothing
    Compensated { reason: LedgerError },
}

impl TransferOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransferOutcome::Completed)
    }
}

impl Ledger {
    /// Move `amount` from `from` in this ledger to `to` in the counterparty ledger.
    ///
    /// Debit, then credit, then on a failed credit re-credit the source.
    /// There is no shared commit point between the two ledgers; `SharedLedger::transfer_between`
    /// hides the intermediate state from other callers.
    ///
    /// Errors (source missing, insufficient funds, negative amount) leave both ledgers untouched.
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        amount: Amount,
        to: Counterparty<'_>,
        dest: AccountNumber,
    ) -> Result<TransferOutcome> {
        let amount = amount.ensure_non_negative("transfer")?;
        self.account_mut(from)?.debit(amount)?;

        let credited = match to {
            Counterparty::Local => self.deposit(dest, amount),
            Counterparty::Peer(peer) => peer.deposit(dest, amount),
        };

        match credited {
            Ok(()) => {
                tracing::debug!(ledger = %self.name(), %from, %dest, %amount, "transfer completed");
                Ok(TransferOutcome::Completed)
            }
            Err(reason) => {
                tracing::warn!(
                    ledger = %self.name(),
                    %from,
                    %dest,
                    %amount,
                    %reason,
                    "transfer credit failed, re-crediting source"
                );
                // The source still exists and just gave up `amount`, so the re-credit cannot fail
                self.account_mut(from)?.credit(amount)?;
                Ok(TransferOutcome::Compensated { reason })
            }
        }
    }

    /// Transfer between two accounts of this ledger
    pub fn transfer_within(
        &mut self,
        from: AccountNumber,
        amount: Amount,
        dest: AccountNumber,
    ) -> Result<TransferOutcome> {
        self.transfer(from, amount, Counterparty::Local, dest)
    }

    /// Transfer to an account of another ledger
    pub fn transfer_to(
        &mut self,
        from: AccountNumber,
        amount: Amount,
        peer: &mut Ledger,
        dest: AccountNumber,
    ) -> Result<TransferOutcome> {
        self.transfer(from, amount, Counterparty::Peer(peer), dest)
    }
}
