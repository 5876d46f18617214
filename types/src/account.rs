//! Fixed-width account identifier.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 20-byte account address.
///
/// Accounts are opaque identifiers; all mutable state (balances, checkpoints,
/// delegation) lives in the ledger, never on the account itself.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Account([u8; 20]);

impl Account {
    /// Address width in bytes.
    pub const LEN: usize = 20;

    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Parse an address from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits).map_err(|_| TypeError::InvalidAddress(s.to_string()))?;
        let bytes: [u8; 20] = raw
            .try_into()
            .map_err(|_| TypeError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account(0x{}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Account {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let account = Account::new([0xAB; 20]);
        let parsed = Account::from_hex(&account.to_string()).unwrap();
        assert_eq!(account, parsed);
    }

    #[test]
    fn test_from_hex_without_prefix() {
        let hex = "ab".repeat(20);
        let account = Account::from_hex(&hex).unwrap();
        assert_eq!(account, Account::new([0xAB; 20]));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Account::from_hex("0xabcd").is_err());
    }

    #[test]
    fn test_from_hex_rejects_bad_digits() {
        let bad = "zz".repeat(20);
        assert!(Account::from_hex(&bad).is_err());
    }

    #[test]
    fn test_zero_address() {
        assert!(Account::ZERO.is_zero());
        assert!(!Account::new([1; 20]).is_zero());
    }
}
