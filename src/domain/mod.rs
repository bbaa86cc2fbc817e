//! Domain layer: the tree store and its entities
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod identifier;
pub mod rows;
pub mod shared;
pub mod store;

pub use entities::{Category, TreeItem};
pub use identifier::NodeId;
pub use rows::TreeRow;
pub use shared::SharedTreeStore;
pub use store::{Lookup, TreeStore};
