//! The running per-proposal tally.
//!
//! The tally trusts its caller: it never checks an upper bound on added
//! votes. Enforcing that a voter cannot spend more than their snapshot power
//! is entirely the ballot's job before forwarding here.

use crate::error::BallotError;
use crate::proposal::Proposal;
use serde::{Deserialize, Serialize};
use tally_types::{ProposalLabel, VoteWeight};

/// Per-proposal vote totals for a fixed, ordered proposal set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tally {
    proposals: Vec<Proposal>,
}

impl Tally {
    /// Build a tally over an ordered, non-empty proposal set.
    pub fn new(labels: Vec<ProposalLabel>) -> Result<Self, BallotError> {
        if labels.is_empty() {
            return Err(BallotError::NoProposals);
        }
        Ok(Self {
            proposals: labels.into_iter().map(Proposal::new).collect(),
        })
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.proposals.len()
    }

    /// Current vote total for one proposal.
    pub fn votes_of(&self, index: usize) -> Result<VoteWeight, BallotError> {
        self.proposals
            .get(index)
            .map(|p| p.votes)
            .ok_or(BallotError::InvalidProposal {
                index,
                count: self.proposals.len(),
            })
    }

    /// Add spent voting power to a proposal's total.
    pub fn add_votes(&mut self, index: usize, amount: VoteWeight) -> Result<(), BallotError> {
        let count = self.proposals.len();
        let proposal = self
            .proposals
            .get_mut(index)
            .ok_or(BallotError::InvalidProposal { index, count })?;
        proposal.votes = proposal
            .votes
            .checked_add(amount)
            .ok_or(BallotError::Overflow)?;
        Ok(())
    }

    /// Index of the proposal with the strictly greatest vote count.
    /// Ties resolve to the lowest index.
    pub fn winning_index(&self) -> usize {
        let mut winner = 0;
        for (index, proposal) in self.proposals.iter().enumerate().skip(1) {
            if proposal.votes > self.proposals[winner].votes {
                winner = index;
            }
        }
        winner
    }

    /// The winning proposal itself.
    pub fn winner(&self) -> &Proposal {
        &self.proposals[self.winning_index()]
    }

    /// Lazy, restartable walk of `(index, proposal)` in index order.
    pub fn results(&self) -> impl Iterator<Item = (usize, &Proposal)> + '_ {
        self.proposals.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(names: &[&str]) -> Tally {
        Tally::new(names.iter().map(|n| ProposalLabel::new(n)).collect()).unwrap()
    }

    #[test]
    fn test_empty_proposal_set_rejected() {
        assert!(matches!(Tally::new(vec![]), Err(BallotError::NoProposals)));
    }

    #[test]
    fn test_add_votes_accumulates() {
        let mut t = tally(&["p0", "p1"]);
        t.add_votes(1, VoteWeight::new(60)).unwrap();
        t.add_votes(1, VoteWeight::new(40)).unwrap();
        assert_eq!(t.votes_of(1).unwrap(), VoteWeight::new(100));
        assert_eq!(t.votes_of(0).unwrap(), VoteWeight::ZERO);
    }

    #[test]
    fn test_add_votes_out_of_range() {
        let mut t = tally(&["p0"]);
        let result = t.add_votes(1, VoteWeight::new(1));
        match result.unwrap_err() {
            BallotError::InvalidProposal { index, count } => {
                assert_eq!(index, 1);
                assert_eq!(count, 1);
            }
            other => panic!("expected InvalidProposal, got {other:?}"),
        }
    }

    #[test]
    fn test_winner_is_strict_maximum() {
        let mut t = tally(&["p0", "p1", "p2"]);
        t.add_votes(0, VoteWeight::new(3)).unwrap();
        t.add_votes(1, VoteWeight::new(9)).unwrap();
        t.add_votes(2, VoteWeight::new(5)).unwrap();
        assert_eq!(t.winning_index(), 1);
        assert_eq!(t.winner().name(), "p1");
    }

    #[test]
    fn test_tie_resolves_to_lowest_index() {
        let mut t = tally(&["p0", "p1", "p2"]);
        t.add_votes(0, VoteWeight::new(5)).unwrap();
        t.add_votes(1, VoteWeight::new(5)).unwrap();
        t.add_votes(2, VoteWeight::new(3)).unwrap();
        assert_eq!(t.winning_index(), 0);
    }

    #[test]
    fn test_all_zero_winner_is_first() {
        let t = tally(&["p0", "p1"]);
        assert_eq!(t.winning_index(), 0);
    }

    #[test]
    fn test_results_in_index_order_and_restartable() {
        let mut t = tally(&["a", "b", "c"]);
        t.add_votes(2, VoteWeight::new(7)).unwrap();

        let first: Vec<_> = t.results().map(|(i, p)| (i, p.votes.raw())).collect();
        let second: Vec<_> = t.results().map(|(i, p)| (i, p.votes.raw())).collect();
        assert_eq!(first, vec![(0, 0), (1, 0), (2, 7)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let mut t = tally(&["p0"]);
        t.add_votes(0, VoteWeight::new(u128::MAX)).unwrap();
        assert!(matches!(
            t.add_votes(0, VoteWeight::new(1)),
            Err(BallotError::Overflow)
        ));
        assert_eq!(t.votes_of(0).unwrap(), VoteWeight::new(u128::MAX));
    }
}
