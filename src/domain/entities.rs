//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::NodeId;

/// A single node record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeItem {
    pub id: NodeId,
    /// `None` marks a root. May name a node that does not exist (orphan).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    pub label: String,
}

impl TreeItem {
    pub fn new(id: impl Into<NodeId>, parent: Option<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent,
            label: label.into(),
        }
    }

    /// Shorthand for a node with `parent = None`.
    pub fn root(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self::new(id, None, label)
    }

    /// Shorthand for a node under `parent`.
    pub fn child(
        id: impl Into<NodeId>,
        parent: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Self::new(id, Some(parent.into()), label)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for TreeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.label)
    }
}

/// Row category derived from whether a node has children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Node with at least one child
    Group,
    /// Leaf node
    Item,
}

impl Category {
    pub fn from_has_children(has_children: bool) -> Self {
        if has_children {
            Category::Group
        } else {
            Category::Item
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Group => write!(f, "Group"),
            Category::Item => write!(f, "Item"),
        }
    }
}
