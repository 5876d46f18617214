//! Bounded-width proposal labels.
//!
//! The external representation of a proposal name is a fixed 32-byte field:
//! shorter names are zero-padded, longer names are truncated. Reads strip the
//! trailing padding so callers see the original text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposal name, stored as a fixed 32-byte zero-padded field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalLabel([u8; 32]);

impl ProposalLabel {
    /// Fixed byte width of the external representation.
    pub const WIDTH: usize = 32;

    /// Build a label from text, truncating to 32 bytes on a char boundary.
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(Self::WIDTH);
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut bytes = [0u8; 32];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self(bytes)
    }

    /// Build a label from its raw fixed-width representation.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The label text with trailing padding bytes stripped.
    pub fn text(&self) -> String {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl fmt::Debug for ProposalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProposalLabel({:?})", self.text())
    }
}

impl fmt::Display for ProposalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl From<&str> for ProposalLabel {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_roundtrip() {
        let label = ProposalLabel::new("Proposal Number 0");
        assert_eq!(label.text(), "Proposal Number 0");
    }

    #[test]
    fn test_padding_is_stripped() {
        let label = ProposalLabel::new("abc");
        assert_eq!(label.as_bytes()[3..], [0u8; 29]);
        assert_eq!(label.text(), "abc");
    }

    #[test]
    fn test_long_name_is_truncated() {
        let long = "x".repeat(50);
        let label = ProposalLabel::new(&long);
        assert_eq!(label.text().len(), 32);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 31 ASCII bytes followed by a 2-byte char that would straddle the cut.
        let name = format!("{}é", "a".repeat(31));
        let label = ProposalLabel::new(&name);
        assert_eq!(label.text(), "a".repeat(31));
    }

    #[test]
    fn test_empty_name() {
        let label = ProposalLabel::new("");
        assert_eq!(label.text(), "");
    }
}
