use chrono::{DateTime, Utc};
use colored::Colorize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type Amount = Decimal;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let disp = match self {
            Self::Credit => "Credit".green(),
            Self::Debit => "Debit".red(),
        };
        write!(f, "{}", disp)
    }
}

/// One completed credit or debit. Created exactly once per successful
/// operation and never updated afterwards; `balance_after` snapshots the
/// running balance at the moment of insertion.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub date: DateTime<Utc>,
    pub kind: TransactionKind,
    pub amount: Amount,
    pub balance_after: Amount,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Amount, balance_after: Amount) -> Transaction {
        Transaction {
            date: Utc::now(),
            kind,
            amount,
            balance_after,
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} (balance: {})",
            self.date.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.balance_after
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use colored;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    use super::{Transaction, TransactionKind};

    #[fixture]
    fn credit() -> Transaction {
        Transaction {
            date: Utc.with_ymd_and_hms(2024, 7, 14, 12, 0, 0).unwrap(),
            kind: TransactionKind::Credit,
            amount: dec!(100.00),
            balance_after: dec!(100.00),
        }
    }

    #[rstest]
    fn can_print(credit: Transaction) {
        colored::control::set_override(false);
        let repr = credit.to_string();
        assert_eq!(repr, "2024-07-14 12:00:00: Credit 100.00 (balance: 100.00)");
    }

    #[test]
    fn kind_prints_its_name() {
        colored::control::set_override(false);
        assert_eq!(TransactionKind::Credit.to_string(), "Credit");
        assert_eq!(TransactionKind::Debit.to_string(), "Debit");
    }

    #[test]
    fn new_snapshots_the_given_balance() {
        let transaction = Transaction::new(TransactionKind::Debit, dec!(40.00), dec!(60.00));
        assert_eq!(transaction.kind, TransactionKind::Debit);
        assert_eq!(transaction.amount, dec!(40.00));
        assert_eq!(transaction.balance_after, dec!(60.00));
    }
}
