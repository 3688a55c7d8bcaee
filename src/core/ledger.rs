use log::{info, warn};

use crate::backend::LedgerStore;
use crate::core::error::{LedgerError, LedgerResult};
use crate::core::state::LedgerState;
use crate::core::transaction::{Amount, Transaction};

/// Sole owner of the ledger state and the only legal mutation path to it.
///
/// Every operation checks the caller's PIN before touching or revealing
/// anything, and every mutation is written through the store before the
/// result is returned. There is no unlocked session: each call
/// re-authenticates independently.
pub struct Ledger<S: LedgerStore> {
    state: LedgerState,
    store: S,
}

impl<S: LedgerStore> Ledger<S> {
    /// Loads a previously persisted ledger, if the store holds one.
    ///
    /// A record whose history does not replay to its recorded balances is
    /// rejected rather than silently adopted.
    pub fn load(store: S) -> LedgerResult<Option<Ledger<S>>> {
        match store.load()? {
            Some(state) => {
                state.check_consistency()?;
                Ok(Some(Ledger { state, store }))
            }
            None => Ok(None),
        }
    }

    /// Starts a fresh zero-balance ledger guarded by `pin` and persists it
    /// immediately.
    pub fn create(store: S, pin: &str) -> LedgerResult<Ledger<S>> {
        let state = LedgerState::new(pin.to_owned());
        store.save(&state)?;
        info!("initialized a fresh ledger");
        return Ok(Ledger { state, store });
    }

    /// Exact-match comparison of `candidate` against the stored PIN.
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.state.pin_matches(candidate)
    }

    /// Adds `amount` to the balance and returns the new balance.
    pub fn credit(&mut self, pin: &str, amount: Amount) -> LedgerResult<Amount> {
        self.gate(pin)?;
        let balance = self.state.credit(amount)?;
        self.store.save(&self.state)?;
        Ok(balance)
    }

    /// Takes `amount` off the balance and returns the new balance.
    pub fn debit(&mut self, pin: &str, amount: Amount) -> LedgerResult<Amount> {
        self.gate(pin)?;
        let balance = self.state.debit(amount)?;
        self.store.save(&self.state)?;
        Ok(balance)
    }

    pub fn balance(&self, pin: &str) -> LedgerResult<Amount> {
        self.gate(pin)?;
        Ok(self.state.balance())
    }

    /// Full history in chronological order.
    pub fn transactions(&self, pin: &str) -> LedgerResult<&[Transaction]> {
        self.gate(pin)?;
        Ok(self.state.transactions())
    }

    /// Replaces the stored PIN after authenticating with the old one and
    /// checking the confirmation.
    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str, confirm_pin: &str) -> LedgerResult<()> {
        self.gate(old_pin)?;
        if new_pin != confirm_pin {
            return Err(LedgerError::PinMismatch);
        }

        self.state.set_pin(new_pin);
        self.store.save(&self.state)?;
        Ok(())
    }

    fn gate(&self, candidate: &str) -> LedgerResult<()> {
        if !self.authenticate(candidate) {
            warn!("rejected operation: PIN does not match");
            return Err(LedgerError::IncorrectPin);
        }
        Ok(())
    }
}
