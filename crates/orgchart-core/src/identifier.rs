//! Node identifiers.
//!
//! Every person or role in an organization tree carries a numeric identifier
//! that is unique within the tree. [`NodeId`] wraps that number so it cannot
//! be confused with indices, counts or coordinates.
//!
//! Identifiers are non-negative integers. JSON ids that are negative, have a
//! fractional part or exceed `u64::MAX` are rejected when the tree is loaded.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single node in an organization tree.
///
/// # Examples
///
/// ```
/// # use orgchart_core::identifier::NodeId;
/// let ceo = NodeId::new(1);
/// assert_eq!(ceo.value(), 1);
/// assert_eq!(ceo.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value of this identifier.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
