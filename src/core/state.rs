use serde::{Deserialize, Serialize};

use crate::core::error::{LedgerError, LedgerResult};
use crate::core::transaction::{Amount, Transaction, TransactionKind};

/// The persisted aggregate: current balance, append-only transaction
/// history and the PIN gating access to both. All mutation goes through
/// the methods below; persisting the result is the caller's concern.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LedgerState {
    balance: Amount,
    transactions: Vec<Transaction>,
    pin: String,
}

impl LedgerState {
    pub fn new(pin: String) -> LedgerState {
        return LedgerState {
            balance: Amount::ZERO,
            transactions: Vec::new(),
            pin,
        };
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Full history, insertion order = chronological order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Adds `amount` to the balance and records the transaction.
    /// Returns the new balance.
    pub fn credit(&mut self, amount: Amount) -> LedgerResult<Amount> {
        Self::require_positive(amount)?;

        self.balance += amount;
        self.transactions
            .push(Transaction::new(TransactionKind::Credit, amount, self.balance));
        return Ok(self.balance);
    }

    /// Takes `amount` off the balance and records the transaction.
    /// Refuses to let the balance go negative. Returns the new balance.
    pub fn debit(&mut self, amount: Amount) -> LedgerResult<Amount> {
        Self::require_positive(amount)?;
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.transactions
            .push(Transaction::new(TransactionKind::Debit, amount, self.balance));
        return Ok(self.balance);
    }

    /// Exact string comparison against the stored PIN.
    pub fn pin_matches(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    pub fn set_pin(&mut self, new_pin: &str) {
        self.pin = new_pin.to_owned();
    }

    fn require_positive(amount: Amount) -> LedgerResult<()> {
        if amount <= Amount::ZERO {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        Ok(())
    }

    /// Replays the whole history from zero, checking every recorded
    /// balance snapshot and the final balance against the running total.
    pub fn check_consistency(&self) -> LedgerResult<()> {
        let mut running = Amount::ZERO;

        for transaction in &self.transactions {
            running = match transaction.kind {
                TransactionKind::Credit => running + transaction.amount,
                TransactionKind::Debit => running - transaction.amount,
            };
            if transaction.balance_after != running {
                return Err(LedgerError::InconsistentHistory {
                    expected: running,
                    recorded: transaction.balance_after,
                });
            }
        }

        if self.balance != running {
            return Err(LedgerError::InconsistentHistory {
                expected: running,
                recorded: self.balance,
            });
        }
        return Ok(());
    }
}
