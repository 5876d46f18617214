//! The voting-power ledger — balances, delegate streams, and the mutation
//! entry points.
//!
//! Raw balances track token ownership. Checkpoint streams track *attributed*
//! power: every balance change is credited to the holder's current delegate,
//! and a delegation change moves exactly the delegator's raw balance between
//! the old and new delegate's streams at one sequence key. Each mutation
//! validates fully before writing anything, so a failed call leaves the
//! ledger untouched.

use crate::checkpoint::CheckpointHistory;
use crate::delegation::DelegationGraph;
use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_types::{Account, SequenceKey, VoteWeight};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VotingPowerLedger {
    /// Raw token balances (ownership, unaffected by delegation).
    balances: HashMap<Account, VoteWeight>,
    /// Per-delegate attributed-power checkpoint streams.
    streams: HashMap<Account, CheckpointHistory>,
    /// Current one-hop delegation mapping.
    delegation: DelegationGraph,
}

impl VotingPowerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Mint `amount` new tokens to `to`, crediting the power to `to`'s
    /// current delegate at `at`.
    pub fn record_mint(
        &mut self,
        to: &Account,
        amount: VoteWeight,
        at: SequenceKey,
    ) -> Result<(), LedgerError> {
        let receiver = self.delegation.delegate_of(to);
        self.ensure_ordered(&receiver, at)?;
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_power = self
            .current_power(&receiver)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(*to, new_balance);
        self.stream_mut(&receiver).record(at, new_power)?;
        tracing::debug!(%to, %amount, %at, "minted voting tokens");
        Ok(())
    }

    /// Transfer `amount` from `from` to `to`, moving attributed power
    /// between their delegates' streams at `at`.
    pub fn record_transfer(
        &mut self,
        from: &Account,
        to: &Account,
        amount: VoteWeight,
        at: SequenceKey,
    ) -> Result<(), LedgerError> {
        let have = self.balance_of(from);
        let new_from_balance = have
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance { have, need: amount })?;
        if from == to {
            return Ok(());
        }
        let new_to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let sender_delegate = self.delegation.delegate_of(from);
        let receiver_delegate = self.delegation.delegate_of(to);
        if sender_delegate == receiver_delegate {
            // Power stays in the same stream; only ownership moves.
            self.balances.insert(*from, new_from_balance);
            self.balances.insert(*to, new_to_balance);
            return Ok(());
        }

        self.ensure_ordered(&sender_delegate, at)?;
        self.ensure_ordered(&receiver_delegate, at)?;
        let new_sender_power = self
            .current_power(&sender_delegate)
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_receiver_power = self
            .current_power(&receiver_delegate)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(*from, new_from_balance);
        self.balances.insert(*to, new_to_balance);
        self.stream_mut(&sender_delegate)
            .record(at, new_sender_power)?;
        self.stream_mut(&receiver_delegate)
            .record(at, new_receiver_power)?;
        tracing::debug!(%from, %to, %amount, %at, "transferred voting tokens");
        Ok(())
    }

    /// Point `from`'s power at `to`, moving `from`'s raw balance's worth of
    /// attributed power from the previous delegate to `to` at `at`.
    ///
    /// `from`'s own raw balance is unaffected. Fails with `InvalidDelegate`
    /// when the mapping would loop back to `from` beyond the self-loop.
    pub fn delegate(
        &mut self,
        from: &Account,
        to: &Account,
        at: SequenceKey,
    ) -> Result<(), LedgerError> {
        let old = self.delegation.delegate_of(from);
        if old == *to {
            return Ok(());
        }
        self.ensure_ordered(&old, at)?;
        self.ensure_ordered(to, at)?;
        let balance = self.balance_of(from);
        let new_old_power = self
            .current_power(&old)
            .checked_sub(balance)
            .ok_or(LedgerError::Overflow)?;
        let new_to_power = self
            .current_power(to)
            .checked_add(balance)
            .ok_or(LedgerError::Overflow)?;

        self.delegation.set_delegate(from, to)?;
        self.stream_mut(&old).record(at, new_old_power)?;
        self.stream_mut(to).record(at, new_to_power)?;
        tracing::debug!(%from, %to, %at, %balance, "delegation updated");
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Attributed power of `account` at the checkpoint with the greatest
    /// key `<= at`; zero if no checkpoint exists at or before it.
    pub fn power_at(&self, account: &Account, at: SequenceKey) -> VoteWeight {
        self.streams
            .get(account)
            .map_or(VoteWeight::ZERO, |h| h.power_at(at))
    }

    /// Live attributed power of `account` (the latest checkpoint value).
    pub fn current_power(&self, account: &Account) -> VoteWeight {
        self.streams
            .get(account)
            .map_or(VoteWeight::ZERO, |h| h.latest())
    }

    /// Raw token balance of `account` (ownership, ignoring delegation).
    pub fn balance_of(&self, account: &Account) -> VoteWeight {
        self.balances
            .get(account)
            .copied()
            .unwrap_or(VoteWeight::ZERO)
    }

    /// The account currently receiving `account`'s power.
    pub fn delegate_of(&self, account: &Account) -> Account {
        self.delegation.delegate_of(account)
    }

    /// Number of checkpoints recorded for `account`.
    pub fn checkpoint_count(&self, account: &Account) -> usize {
        self.streams.get(account).map_or(0, |h| h.len())
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Serialize the full ledger state to bytes (bincode).
    pub fn to_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(self).map_err(|e| LedgerError::Serialization(e.to_string()))
    }

    /// Restore a ledger from serialized bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        bincode::deserialize(bytes).map_err(|e| LedgerError::Serialization(e.to_string()))
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn ensure_ordered(&self, account: &Account, at: SequenceKey) -> Result<(), LedgerError> {
        if let Some(history) = self.streams.get(account) {
            if let Some(last) = history.last_key() {
                if at < last {
                    return Err(LedgerError::SequenceRegression { last, at });
                }
            }
        }
        Ok(())
    }

    fn stream_mut(&mut self, account: &Account) -> &mut CheckpointHistory {
        self.streams.entry(*account).or_default()
    }
}
