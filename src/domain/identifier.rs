//! Node identifiers: integer or text, compared by kind and value.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a node in a [`TreeStore`](crate::domain::TreeStore).
///
/// `Int(1)` and `Text("1")` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{}", n),
            NodeId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parses command line style identifiers.
///
/// Anything that parses as `i64` becomes `Int`, everything else `Text`.
/// Surrounding double quotes force `Text`: `"\"1\""` is `Text("1")`.
impl FromStr for NodeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
            return Ok(NodeId::Text(trimmed[1..trimmed.len() - 1].to_string()));
        }
        Ok(trimmed
            .parse::<i64>()
            .map(NodeId::Int)
            .unwrap_or_else(|_| NodeId::Text(trimmed.to_string())))
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<i32> for NodeId {
    fn from(n: i32) -> Self {
        NodeId::Int(n.into())
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Text(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Text(s)
    }
}
