//! Fundamental types for the tally voting engine.
//!
//! This crate defines the core types shared by the ledger and ballot crates:
//! accounts, voting-power weights, sequence keys, and proposal labels.

pub mod account;
pub mod error;
pub mod label;
pub mod sequence;
pub mod weight;

pub use account::Account;
pub use error::TypeError;
pub use label::ProposalLabel;
pub use sequence::SequenceKey;
pub use weight::VoteWeight;
