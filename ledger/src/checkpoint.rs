//! Per-account voting-power checkpoint streams.
//!
//! Each account owns one append-only vector of `(sequence key, power)` pairs
//! in strictly increasing key order. Historical lookups binary-search the
//! vector — O(log n) — and appends are O(1) amortized. A write that leaves
//! the power unchanged is skipped, and a second write at the current key
//! overwrites the last value instead of appending, so the stream stays dense.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use tally_types::{SequenceKey, VoteWeight};

/// A recorded power change: the value that became effective at `at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub at: SequenceKey,
    pub power: VoteWeight,
}

/// An ordered, append-only checkpoint stream for one account.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckpointHistory {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent power value, or zero for an empty stream.
    pub fn latest(&self) -> VoteWeight {
        self.checkpoints
            .last()
            .map_or(VoteWeight::ZERO, |c| c.power)
    }

    /// Key of the most recent checkpoint, if any.
    pub fn last_key(&self) -> Option<SequenceKey> {
        self.checkpoints.last().map(|c| c.at)
    }

    /// The power in effect at `at`: the checkpoint with the greatest key
    /// `<= at`, or zero if none exists at or before it. Checkpoints with
    /// keys strictly after `at` never influence the answer.
    pub fn power_at(&self, at: SequenceKey) -> VoteWeight {
        let idx = self.checkpoints.partition_point(|c| c.at <= at);
        if idx == 0 {
            VoteWeight::ZERO
        } else {
            self.checkpoints[idx - 1].power
        }
    }

    /// Record that the account's power became `power` at `at`.
    ///
    /// No-op when the value is unchanged; overwrite when `at` equals the
    /// last key; error when `at` would go backwards.
    pub fn record(&mut self, at: SequenceKey, power: VoteWeight) -> Result<(), LedgerError> {
        if let Some(last) = self.checkpoints.last_mut() {
            if at < last.at {
                return Err(LedgerError::SequenceRegression { last: last.at, at });
            }
            if at == last.at {
                last.power = power;
                return Ok(());
            }
            if last.power == power {
                return Ok(());
            }
        } else if power.is_zero() {
            // An empty stream already reads as zero everywhere.
            return Ok(());
        }
        self.checkpoints.push(Checkpoint { at, power });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
