//! Ballot proposals.

use serde::{Deserialize, Serialize};
use tally_types::{ProposalLabel, VoteWeight};

/// One entry in a ballot's fixed proposal set.
///
/// The index is implicit: proposals are dense and 0-based by position in the
/// ballot's ordered set, fixed at creation. Only the vote count mutates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    /// Fixed-width name, set at ballot creation.
    pub label: ProposalLabel,
    /// Total voting power spent on this proposal so far.
    pub votes: VoteWeight,
}

impl Proposal {
    pub fn new(label: ProposalLabel) -> Self {
        Self {
            label,
            votes: VoteWeight::ZERO,
        }
    }

    /// The proposal name with padding stripped.
    pub fn name(&self) -> String {
        self.label.text()
    }
}
