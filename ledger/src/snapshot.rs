//! Point-in-time voting-power resolution.
//!
//! Because checkpoint streams are append-only and a `power_at` lookup never
//! reads past its query key, a snapshot taken at a historical key is a pure
//! function of `(account, key)`: it can be recomputed identically at any
//! later time, no matter what activity has happened since. The ballot layer
//! relies on this to treat lazily seeded values as fixed truth.

use tally_types::{Account, SequenceKey, VoteWeight};

use crate::ledger::VotingPowerLedger;

/// Anything that can answer historical attributed-power queries.
pub trait PowerSource {
    /// Power of `account` at the checkpoint with the greatest key `<= at`,
    /// or zero if none exists at or before it.
    fn power_at(&self, account: &Account, at: SequenceKey) -> VoteWeight;
}

impl PowerSource for VotingPowerLedger {
    fn power_at(&self, account: &Account, at: SequenceKey) -> VoteWeight {
        VotingPowerLedger::power_at(self, account, at)
    }
}

/// Read-only view over a power source for historical lookups.
pub struct SnapshotResolver<'a> {
    source: &'a dyn PowerSource,
}

impl<'a> SnapshotResolver<'a> {
    pub fn new(source: &'a dyn PowerSource) -> Self {
        Self { source }
    }

    /// The power `account` held as of `reference`. Deterministic and
    /// side-effect free.
    pub fn snapshot_of(&self, account: &Account, reference: SequenceKey) -> VoteWeight {
        self.source.power_at(account, reference)
    }
}
