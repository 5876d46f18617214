//! The ballot state machine.
//!
//! Construction pins the proposal set and a snapshot reference key that must
//! be strictly in the past. Each voter's spendable power is seeded lazily on
//! first touch — but always as of the fixed reference, so the answer is the
//! same no matter when the first touch happens. A vote decrements the
//! voter's remaining power and forwards the spent weight to the tally in one
//! atomic step: every check runs before either side mutates.

use crate::error::BallotError;
use crate::proposal::Proposal;
use crate::tally::Tally;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_ledger::{PowerSource, SnapshotResolver};
use tally_types::{Account, ProposalLabel, SequenceKey, VoteWeight};

/// Ballot lifecycle. `Closed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallotPhase {
    Open,
    Closed,
}

/// A tokenized ballot over a fixed proposal set and snapshot reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ballot {
    tally: Tally,
    /// Snapshot point: power is read as of this key, fixed at creation.
    reference: SequenceKey,
    /// Remaining spendable power per voter. Seeded on first touch, then
    /// only ever decreases.
    remaining: HashMap<Account, VoteWeight>,
    phase: BallotPhase,
}

impl Ballot {
    /// Create an open ballot.
    ///
    /// `reference` must be strictly before `created_at`, the key at which
    /// the ballot comes into existence; otherwise the snapshot could be
    /// gamed by activity that races ballot creation.
    pub fn new(
        labels: Vec<ProposalLabel>,
        reference: SequenceKey,
        created_at: SequenceKey,
    ) -> Result<Self, BallotError> {
        if reference >= created_at {
            return Err(BallotError::FutureReference {
                reference,
                created_at,
            });
        }
        Ok(Self {
            tally: Tally::new(labels)?,
            reference,
            remaining: HashMap::new(),
            phase: BallotPhase::Open,
        })
    }

    pub fn phase(&self) -> BallotPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == BallotPhase::Open
    }

    /// The sequence key voting power is snapshotted at.
    pub fn reference(&self) -> SequenceKey {
        self.reference
    }

    pub fn proposal_count(&self) -> usize {
        self.tally.proposal_count()
    }

    /// Administratively close the ballot. Idempotent; queries stay available.
    pub fn close(&mut self) {
        if self.phase == BallotPhase::Open {
            self.phase = BallotPhase::Closed;
            tracing::debug!(reference = %self.reference, "ballot closed");
        }
    }

    /// Spendable power left for `account`, seeding from the snapshot on
    /// first touch. First seed wins: once cached, the ledger is never
    /// consulted again for this account.
    pub fn remaining_power_of(&mut self, account: &Account, source: &dyn PowerSource) -> VoteWeight {
        if let Some(cached) = self.remaining.get(account) {
            return *cached;
        }
        let seeded = SnapshotResolver::new(source).snapshot_of(account, self.reference);
        self.remaining.insert(*account, seeded);
        seeded
    }

    /// Spend `amount` of `account`'s snapshot power on the proposal at
    /// `index`. All-or-nothing: a failed vote changes neither the voter's
    /// remaining power nor the tally.
    pub fn vote(
        &mut self,
        account: &Account,
        index: usize,
        amount: VoteWeight,
        source: &dyn PowerSource,
    ) -> Result<(), BallotError> {
        if self.phase == BallotPhase::Closed {
            return Err(BallotError::BallotClosed);
        }
        if !self.tally.contains(index) {
            return Err(BallotError::InvalidProposal {
                index,
                count: self.tally.proposal_count(),
            });
        }
        if amount.is_zero() {
            return Err(BallotError::ZeroAmount);
        }
        let remaining = self.remaining_power_of(account, source);
        let new_remaining = remaining
            .checked_sub(amount)
            .ok_or(BallotError::InsufficientPower {
                requested: amount,
                remaining,
            })?;

        self.tally.add_votes(index, amount)?;
        self.remaining.insert(*account, new_remaining);
        tracing::debug!(voter = %account, index, %amount, %new_remaining, "vote cast");
        Ok(())
    }

    // ── Query surface ────────────────────────────────────────────────────

    /// Index of the winning proposal (lowest index on ties).
    pub fn winning_proposal(&self) -> usize {
        self.tally.winning_index()
    }

    /// Name of the winning proposal, padding stripped.
    pub fn winner_name(&self) -> String {
        self.tally.winner().name()
    }

    /// `(index, proposal)` pairs in index order; restartable.
    pub fn results(&self) -> impl Iterator<Item = (usize, &Proposal)> + '_ {
        self.tally.results()
    }

    /// Current vote total for one proposal.
    pub fn votes_of(&self, index: usize) -> Result<VoteWeight, BallotError> {
        self.tally.votes_of(index)
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Serialize the full ballot state to bytes (bincode).
    pub fn to_bytes(&self) -> Result<Vec<u8>, BallotError> {
        bincode::serialize(self).map_err(|e| BallotError::Serialization(e.to_string()))
    }

    /// Restore a ballot from serialized bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BallotError> {
        bincode::deserialize(bytes).map_err(|e| BallotError::Serialization(e.to_string()))
    }
}
