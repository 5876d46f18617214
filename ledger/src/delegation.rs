//! One-hop vote delegation.
//!
//! Every account has exactly one active delegate and defaults to itself.
//! Attribution is flattened: a delegator's balance always counts toward its
//! *direct* delegate, never onward through the delegate's own choice. That
//! rule keeps resolution O(1) and makes long chains impossible by
//! construction — the loop check below only guards the stored mapping.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tally_types::Account;

/// The current delegator → delegate mapping.
///
/// Accounts absent from the map delegate to themselves.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DelegationGraph {
    delegates: HashMap<Account, Account>,
}

impl DelegationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The account currently receiving `account`'s power (itself by default).
    pub fn delegate_of(&self, account: &Account) -> Account {
        self.delegates.get(account).copied().unwrap_or(*account)
    }

    /// Point `from` at `to`, returning the previous delegate.
    ///
    /// Self-delegation is the base case and always allowed. Fails with
    /// `InvalidDelegate` when the stored mapping already leads from `to`
    /// back to `from`, which would close a loop longer than the self-loop.
    pub fn set_delegate(&mut self, from: &Account, to: &Account) -> Result<Account, LedgerError> {
        self.check_loop(from, to)?;
        let old = self.delegate_of(from);
        if to == from {
            self.delegates.remove(from);
        } else {
            self.delegates.insert(*from, *to);
        }
        Ok(old)
    }

    fn check_loop(&self, from: &Account, to: &Account) -> Result<(), LedgerError> {
        if to == from {
            return Ok(());
        }
        let mut current = *to;
        let mut visited = HashSet::new();
        while visited.insert(current) {
            match self.delegates.get(&current) {
                Some(next) if next == from => {
                    return Err(LedgerError::InvalidDelegate {
                        delegator: *from,
                        delegate: *to,
                    });
                }
                Some(next) if *next == current => break,
                Some(next) => current = *next,
                None => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(n: u8) -> Account {
        Account::new([n; 20])
    }

    #[test]
    fn test_default_is_self_delegation() {
        let graph = DelegationGraph::new();
        let a = account(1);
        assert_eq!(graph.delegate_of(&a), a);
    }

    #[test]
    fn test_set_and_read_delegate() {
        let mut graph = DelegationGraph::new();
        let (a, b) = (account(1), account(2));
        let old = graph.set_delegate(&a, &b).unwrap();
        assert_eq!(old, a);
        assert_eq!(graph.delegate_of(&a), b);
    }

    #[test]
    fn test_redelegate_returns_previous() {
        let mut graph = DelegationGraph::new();
        let (a, b, c) = (account(1), account(2), account(3));
        graph.set_delegate(&a, &b).unwrap();
        let old = graph.set_delegate(&a, &c).unwrap();
        assert_eq!(old, b);
        assert_eq!(graph.delegate_of(&a), c);
    }

    #[test]
    fn test_self_delegation_allowed_and_clears_entry() {
        let mut graph = DelegationGraph::new();
        let (a, b) = (account(1), account(2));
        graph.set_delegate(&a, &b).unwrap();
        let old = graph.set_delegate(&a, &a).unwrap();
        assert_eq!(old, b);
        assert_eq!(graph.delegate_of(&a), a);
    }

    #[test]
    fn test_two_party_loop_rejected() {
        let mut graph = DelegationGraph::new();
        let (a, b) = (account(1), account(2));
        graph.set_delegate(&a, &b).unwrap();
        let result = graph.set_delegate(&b, &a);
        assert!(matches!(
            result,
            Err(LedgerError::InvalidDelegate { .. })
        ));
        // Mapping untouched on failure.
        assert_eq!(graph.delegate_of(&b), b);
    }

    #[test]
    fn test_longer_loop_rejected() {
        let mut graph = DelegationGraph::new();
        let (a, b, c) = (account(1), account(2), account(3));
        graph.set_delegate(&a, &b).unwrap();
        graph.set_delegate(&b, &c).unwrap();
        assert!(graph.set_delegate(&c, &a).is_err());
    }

    #[test]
    fn test_delegating_to_a_delegator_is_one_hop() {
        let mut graph = DelegationGraph::new();
        let (a, b, c) = (account(1), account(2), account(3));
        graph.set_delegate(&a, &b).unwrap();
        // C may point at A even though A points onward; C's power stops at A.
        graph.set_delegate(&c, &a).unwrap();
        assert_eq!(graph.delegate_of(&c), a);
        assert_eq!(graph.delegate_of(&a), b);
    }
}
