use tally_types::{Account, SequenceKey, VoteWeight};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: VoteWeight, need: VoteWeight },

    #[error("delegating {delegator} to {delegate} would form a delegation loop")]
    InvalidDelegate { delegator: Account, delegate: Account },

    #[error("sequence key {at} precedes last checkpoint at {last}")]
    SequenceRegression { last: SequenceKey, at: SequenceKey },

    #[error("arithmetic overflow")]
    Overflow,

    #[error("serialization error: {0}")]
    Serialization(String),
}
