use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::backend::interface::{LedgerStore, Result};
use crate::core::LedgerState;

/// File-backed store keeping the whole ledger record as one JSON
/// document.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore {
            path: path.as_ref().to_owned(),
        }
    }
}

impl LedgerStore for JsonStore {
    fn load(&self) -> Result<Option<LedgerState>> {
        let record = match fs::read_to_string(&self.path) {
            Ok(record) => record,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no ledger record at {}", self.path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let state = serde_json::from_str(&record)?;
        debug!("read ledger record from {}", self.path.display());
        return Ok(Some(state));
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        let record = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, record)?;
        debug!("wrote ledger record to {}", self.path.display());
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tempfile::tempdir;

    use crate::backend::{BackendError, JsonStore, LedgerStore};
    use crate::core::transaction::{Transaction, TransactionKind};
    use crate::core::LedgerState;

    #[fixture]
    fn state() -> LedgerState {
        let mut state = LedgerState::new("1234".to_owned());
        state.credit(dec!(100.00)).unwrap();
        state.debit(dec!(40.00)).unwrap();
        return state;
    }

    #[fixture]
    fn transaction() -> Transaction {
        Transaction {
            date: Utc.with_ymd_and_hms(2024, 7, 14, 12, 0, 0).unwrap(),
            kind: TransactionKind::Credit,
            amount: dec!(100.00),
            balance_after: dec!(100.00),
        }
    }

    #[fixture]
    fn transaction_json() -> serde_json::Value {
        json!({
            "date": "2024-07-14T12:00:00Z",
            "kind": "Credit",
            "amount": "100.00",
            "balance_after": "100.00"
        })
    }

    #[rstest]
    fn transaction_serialize(transaction: Transaction, transaction_json: serde_json::Value) {
        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(value, transaction_json);
    }

    #[rstest]
    fn transaction_deserialize(transaction: Transaction, transaction_json: serde_json::Value) {
        let parsed = serde_json::from_value::<Transaction>(transaction_json).unwrap();
        assert_eq!(parsed, transaction);
    }

    #[test]
    fn record_deserialize() {
        let record = json!({
            "balance": "60.00",
            "transactions": [
                {
                    "date": "2024-07-14T12:00:00Z",
                    "kind": "Credit",
                    "amount": "100.00",
                    "balance_after": "100.00"
                },
                {
                    "date": "2024-07-14T12:05:00Z",
                    "kind": "Debit",
                    "amount": "40.00",
                    "balance_after": "60.00"
                }
            ],
            "pin": "1234"
        });

        let state = serde_json::from_value::<LedgerState>(record).unwrap();

        assert_eq!(state.balance(), dec!(60.00));
        assert_eq!(state.transactions().len(), 2);
        assert!(state.pin_matches("1234"));
        state.check_consistency().unwrap();
    }

    #[rstest]
    fn save_then_load_round_trip(state: LedgerState) {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("ledger.json"));

        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[rstest]
    fn save_overwrites_the_previous_record(state: LedgerState) {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("ledger.json"));

        store.save(&LedgerState::new("0000".to_owned())).unwrap();
        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn load_garbage_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "{not a ledger").unwrap();

        let res = JsonStore::new(&path).load();

        assert!(matches!(res, Err(BackendError::Malformed(_))));
    }
}
