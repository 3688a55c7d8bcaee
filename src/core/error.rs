use thiserror::Error;

use crate::backend::BackendError;
use crate::core::transaction::Amount;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Occurs when an operation is attempted with a PIN that does not
    /// match the stored one.
    #[error("incorrect PIN")]
    IncorrectPin,
    /// Occurs when a credit or debit is given a zero or negative amount.
    #[error("amount must be positive: {0}")]
    NonPositiveAmount(Amount),
    /// Occurs when a debit requests more than the current balance holds.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        available: Amount,
        requested: Amount,
    },
    /// Occurs when the confirmation of a new PIN differs from it.
    #[error("new PINs do not match")]
    PinMismatch,
    /// Occurs when a loaded record's history does not replay to its
    /// recorded balances.
    #[error("inconsistent history: replaying gives {expected}, record says {recorded}")]
    InconsistentHistory {
        expected: Amount,
        recorded: Amount,
    },
    /// Storage failure. After a mutation this means the in-memory state
    /// may be ahead of the persisted record.
    #[error(transparent)]
    Store(#[from] BackendError),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
