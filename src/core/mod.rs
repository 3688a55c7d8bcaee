pub mod error;
pub mod ledger;
pub mod state;
pub mod transaction;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use state::LedgerState;
pub use transaction::{Transaction, TransactionKind};
