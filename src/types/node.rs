//! Node identifiers.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::QuizError;

/// A graph node label: a single uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(char);

impl NodeId {
    /// Create a node id from a letter, uppercasing it. Returns None for non-letters.
    pub fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_alphabetic() {
            Some(Self(letter.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Parse a label, ignoring surrounding whitespace and case.
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// The underlying letter.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| QuizError::InvalidLabel(s.to_string()))
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Build a `NodeId` from a letter known at compile time.
///
/// Panics on a non-letter; only used for design constants.
pub(crate) const fn const_node(letter: char) -> NodeId {
    assert!(letter.is_ascii_uppercase());
    NodeId(letter)
}
