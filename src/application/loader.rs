//! Bulk loading of tree items from TOML files.
//!
//! ```toml
//! [[items]]
//! id = 1
//! label = "Item 1"
//!
//! [[items]]
//! id = "91064cee"
//! parent = 1
//! label = "Item 2"
//! ```
//!
//! Integer ids become [`NodeId::Int`](crate::domain::NodeId::Int), strings
//! become `Text`. A missing `parent` marks a root.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{TreeItem, TreeStore};

/// On-disk layout of an items file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsFile {
    #[serde(default)]
    pub items: Vec<TreeItem>,
}

/// Parse items from TOML content. `path` is only used for error messages.
///
/// Duplicate ids are returned as-is; the store keeps the first one.
pub fn parse_items(content: &str, path: &Path) -> ApplicationResult<Vec<TreeItem>> {
    let file: ItemsFile = toml::from_str(content).map_err(|e| ApplicationError::ItemsFile {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    Ok(file.items)
}

#[instrument(level = "debug")]
pub fn load_items(path: &Path) -> ApplicationResult<Vec<TreeItem>> {
    let content = fs::read_to_string(path).with_path_context("read items file", path)?;
    let items = parse_items(&content, path)?;
    debug!(count = items.len(), "items parsed");
    Ok(items)
}

/// Read `path` and build a store from its items, in file order.
pub fn load_store(path: &Path) -> ApplicationResult<TreeStore> {
    Ok(TreeStore::new(load_items(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeId;

    #[test]
    fn given_mixed_ids_when_parsing_then_kinds_are_kept() {
        let content = r#"
[[items]]
id = 1
label = "root"

[[items]]
id = "1"
parent = 1
label = "text one"
"#;
        let items = parse_items(content, Path::new("items.toml")).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, NodeId::Int(1));
        assert_eq!(items[0].parent, None);
        assert_eq!(items[1].id, NodeId::Text("1".into()));
        assert_eq!(items[1].parent, Some(NodeId::Int(1)));
    }
}
