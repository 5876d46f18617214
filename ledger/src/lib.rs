//! Voting-power ledger.
//!
//! Tracks raw token balances plus, per account, an append-only stream of
//! voting-power checkpoints keyed by an externally supplied sequence key.
//! Delegation redirects power attribution (never token ownership) one hop to
//! a concrete holder. Historical queries stay stable forever, which is what
//! makes ballot snapshots safe against later activity.

pub mod checkpoint;
pub mod delegation;
pub mod error;
pub mod ledger;
pub mod snapshot;

pub use checkpoint::{Checkpoint, CheckpointHistory};
pub use delegation::DelegationGraph;
pub use error::LedgerError;
pub use ledger::VotingPowerLedger;
pub use snapshot::{PowerSource, SnapshotResolver};
