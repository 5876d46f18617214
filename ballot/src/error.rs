use tally_types::{SequenceKey, VoteWeight};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BallotError {
    #[error("proposal index {index} out of range: ballot has {count} proposals")]
    InvalidProposal { index: usize, count: usize },

    #[error("insufficient voting power: requested {requested}, remaining {remaining}")]
    InsufficientPower {
        requested: VoteWeight,
        remaining: VoteWeight,
    },

    #[error("vote amount must be greater than zero")]
    ZeroAmount,

    #[error("ballot is closed")]
    BallotClosed,

    #[error("snapshot reference {reference} is not strictly before ballot creation at {created_at}")]
    FutureReference {
        reference: SequenceKey,
        created_at: SequenceKey,
    },

    #[error("ballot requires at least one proposal")]
    NoProposals,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("serialization error: {0}")]
    Serialization(String),
}
