//! Application layer: loading items and wiring the store
//!
//! This layer orchestrates domain logic and owns all file I/O.

pub mod error;
pub mod error_ext;
pub mod loader;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::{load_items, load_store, parse_items};
