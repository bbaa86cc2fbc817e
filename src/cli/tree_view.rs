//! termtree rendering of a store, starting from its roots.

use std::collections::HashSet;

use termtree::Tree;

use crate::domain::{NodeId, TreeItem, TreeStore};

pub trait TreeStoreConvert {
    fn to_tree_strings(&self) -> Vec<Tree<String>>;
}

impl TreeStoreConvert for TreeStore {
    /// One tree per root or orphan. Nodes only reachable through a parent
    /// cycle have no root and are not shown.
    fn to_tree_strings(&self) -> Vec<Tree<String>> {
        fn build<'s>(
            store: &'s TreeStore,
            item: &'s TreeItem,
            visited: &mut HashSet<&'s NodeId>,
        ) -> Tree<String> {
            let mut tree = Tree::new(item.to_string());
            for child in store.get_children(&item.id) {
                if visited.insert(&child.id) {
                    tree.push(build(store, child, visited));
                }
            }
            tree
        }

        let roots = self.roots();
        let mut visited: HashSet<&NodeId> = roots.iter().map(|root| &root.id).collect();
        roots
            .into_iter()
            .map(|root| build(self, root, &mut visited))
            .collect()
    }
}
