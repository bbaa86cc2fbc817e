//! In-memory indexed tree store.
//!
//! [`domain::TreeStore`] keeps nodes with an integer or text id and an optional
//! parent id. Lookups and direct-children queries are O(1); descendants and
//! ancestors are walked on demand; removal cascades to the whole subtree.
//!
//! ```
//! use treestore::domain::{NodeId, TreeItem, TreeStore};
//!
//! let store = TreeStore::new([
//!     TreeItem::root(1, "A"),
//!     TreeItem::child(2, 1, "B"),
//!     TreeItem::child(3, 1, "C"),
//!     TreeItem::child(4, 2, "D"),
//! ]);
//! let ids: Vec<_> = store
//!     .get_all_children(&NodeId::from(1))
//!     .iter()
//!     .map(|item| item.id.to_string())
//!     .collect();
//! assert_eq!(ids, ["2", "4", "3"]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
