//! Flat row projection of a [`TreeStore`] for tabular display.

use itertools::Itertools;

use crate::domain::store::Lookup;
use crate::domain::{Category, TreeItem, TreeStore};

/// One display row per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow<'s> {
    /// 1-based position in [`TreeStore::get_all`] order
    pub ordinal: usize,
    pub category: Category,
    /// Labels from the outermost ancestor down to the node itself
    pub path: Vec<&'s str>,
    pub item: &'s TreeItem,
}

impl TreeRow<'_> {
    pub fn joined_path(&self, separator: &str) -> String {
        self.path.iter().join(separator)
    }
}

impl TreeStore {
    /// Rows for every node, in insertion order.
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        self.iter()
            .enumerate()
            .map(|(i, item)| TreeRow {
                ordinal: i + 1,
                category: self.category(&item.id),
                path: self.data_path(&item.id),
                item,
            })
            .collect()
    }

    /// Root-to-node label path. Empty for an unknown id.
    pub fn data_path<'a>(&self, id: impl Lookup<'a> + Copy) -> Vec<&str> {
        let Some(item) = self.get_item(id) else {
            return Vec::new();
        };
        self.get_all_parents(id)
            .into_iter()
            .rev()
            .chain(std::iter::once(item))
            .map(|node| node.label.as_str())
            .collect()
    }

    pub fn category<'a>(&self, id: impl Lookup<'a>) -> Category {
        Category::from_has_children(self.has_children(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeId;

    fn store() -> TreeStore {
        TreeStore::new([
            TreeItem::root(1, "Item 1"),
            TreeItem::child("91064cee", 1, "Item 2"),
            TreeItem::child(3, 1, "Item 3"),
            TreeItem::child(4, "91064cee", "Item 4"),
            TreeItem::child(5, "91064cee", "Item 5"),
        ])
    }

    #[test]
    fn given_nested_node_when_getting_data_path_then_root_first() {
        let store = store();
        assert_eq!(
            store.data_path(&NodeId::from(4)),
            vec!["Item 1", "Item 2", "Item 4"]
        );
    }

    #[test]
    fn given_root_when_getting_data_path_then_only_own_label() {
        assert_eq!(store().data_path(&NodeId::from(1)), vec!["Item 1"]);
    }

    #[test]
    fn given_unknown_id_when_getting_data_path_then_empty() {
        let store = store();
        assert!(store.data_path(&NodeId::from(999)).is_empty());
        assert!(store.data_path(None::<&NodeId>).is_empty());
    }

    #[test]
    fn given_store_when_projecting_rows_then_ordinals_and_categories_follow() {
        let store = store();
        let rows = store.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].ordinal, 1);
        assert_eq!(rows[0].item.label, "Item 1");
        assert_eq!(rows[0].category, Category::Group);
        assert_eq!(rows[4].category, Category::Item);
        assert_eq!(rows[3].joined_path(" / "), "Item 1 / Item 2 / Item 4");
    }
}
