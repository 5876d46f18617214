//! Sequence key type used to order ledger mutations.
//!
//! Keys are externally supplied (block number or logical clock). The engine
//! never generates its own ordering — callers pass a monotonically
//! increasing key with every mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monotone position in the external mutation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceKey(u64);

impl SequenceKey {
    /// The origin key (sequence zero).
    pub const GENESIS: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
