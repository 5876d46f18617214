//! Tokenized ballot over snapshot-fixed voting power.
//!
//! A ballot pins a historical sequence key at construction and seeds each
//! voter's spendable power from the ledger as of that key, first touch wins.
//! Voters spend power in whole or in fractions across a fixed proposal set;
//! the running tally determines the winner with a lowest-index tie-break.

pub mod ballot;
pub mod error;
pub mod proposal;
pub mod tally;

pub use ballot::{Ballot, BallotPhase};
pub use error::BallotError;
pub use proposal::Proposal;
pub use tally::Tally;
