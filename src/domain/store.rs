//! Arena-backed tree store with a primary index and a children index.

use std::collections::{HashMap, HashSet};
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::{NodeId, TreeItem};

/// Anything that may name a node. `None` acts as the null identifier:
/// queries answer with absence, mutations do nothing.
pub trait Lookup<'a>: fmt::Debug {
    fn lookup(self) -> Option<&'a NodeId>;
}

impl<'a> Lookup<'a> for &'a NodeId {
    fn lookup(self) -> Option<&'a NodeId> {
        Some(self)
    }
}

impl<'a> Lookup<'a> for Option<&'a NodeId> {
    fn lookup(self) -> Option<&'a NodeId> {
        self
    }
}

impl<'a> Lookup<'a> for &'a Option<NodeId> {
    fn lookup(self) -> Option<&'a NodeId> {
        self.as_ref()
    }
}

/// In-memory tree of [`TreeItem`]s.
///
/// Records live in a generational arena. `index` maps ids to arena slots,
/// `children` maps a parent id to the ordered slots of its direct children.
/// Both refer into the same arena, so they can only disagree on membership,
/// never on content. `order` keeps insertion order for [`TreeStore::get_all`].
#[derive(Debug)]
pub struct TreeStore {
    arena: Arena<TreeItem>,
    index: HashMap<NodeId, Index>,
    children: HashMap<NodeId, Vec<Index>>,
    order: Vec<Index>,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<TreeItem> for TreeStore {
    fn from_iter<I: IntoIterator<Item = TreeItem>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl TreeStore {
    pub fn empty() -> Self {
        Self {
            arena: Arena::new(),
            index: HashMap::new(),
            children: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Bulk load in order. A repeated id is dropped (first occurrence wins);
    /// parents are not checked.
    #[instrument(level = "debug", skip_all)]
    pub fn new(items: impl IntoIterator<Item = TreeItem>) -> Self {
        let mut store = Self::empty();
        for item in items {
            store.add_item(item);
        }
        debug!(count = store.len(), "tree store loaded");
        store
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains<'a>(&self, id: impl Lookup<'a>) -> bool {
        id.lookup().is_some_and(|id| self.index.contains_key(id))
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeItem> + '_ {
        self.order.iter().filter_map(|&slot| self.arena.get(slot))
    }

    /// All nodes in insertion order. The vector is detached from the store.
    #[instrument(level = "trace", skip(self))]
    pub fn get_all(&self) -> Vec<&TreeItem> {
        self.iter().collect()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_item<'a>(&self, id: impl Lookup<'a>) -> Option<&TreeItem> {
        let slot = self.index.get(id.lookup()?)?;
        self.arena.get(*slot)
    }

    /// Direct children in insertion order; empty when there are none.
    #[instrument(level = "trace", skip(self))]
    pub fn get_children<'a>(&self, id: impl Lookup<'a>) -> Vec<&TreeItem> {
        id.lookup()
            .map(|id| self.resolve(self.child_slots(id)))
            .unwrap_or_default()
    }

    pub fn has_children<'a>(&self, id: impl Lookup<'a>) -> bool {
        id.lookup()
            .is_some_and(|id| !self.child_slots(id).is_empty())
    }

    /// All descendants in depth-first pre-order, each at most once. If
    /// reparenting put the start node on a cycle, it is listed once where the
    /// cycle reaches it and is not expanded again.
    #[instrument(level = "trace", skip(self))]
    pub fn get_all_children<'a>(&self, id: impl Lookup<'a>) -> Vec<&TreeItem> {
        id.lookup()
            .map(|id| self.resolve(&self.descendant_slots(id)))
            .unwrap_or_default()
    }

    /// Node named by the target's `parent`, if both exist.
    #[instrument(level = "trace", skip(self))]
    pub fn get_parent<'a>(&self, id: impl Lookup<'a>) -> Option<&TreeItem> {
        let item = self.get_item(id)?;
        self.get_item(&item.parent)
    }

    /// Ancestors from nearest to farthest. Stops at the first parent that does
    /// not resolve or that was already seen.
    #[instrument(level = "trace", skip(self))]
    pub fn get_all_parents<'a>(&self, id: impl Lookup<'a>) -> Vec<&TreeItem> {
        let mut parents = Vec::new();
        let Some(mut current) = self.get_item(id) else {
            return parents;
        };
        let mut visited: HashSet<&NodeId> = HashSet::from([&current.id]);

        while let Some(parent_id) = current.parent.as_ref() {
            if !visited.insert(parent_id) {
                debug!(id = %parent_id, "cycle in parent chain, stopping");
                break;
            }
            match self.get_item(parent_id) {
                Some(parent) => {
                    parents.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        parents
    }

    /// Nodes without a resolvable parent: true roots and orphans.
    pub fn roots(&self) -> Vec<&TreeItem> {
        self.iter()
            .filter(|item| !self.contains(&item.parent))
            .collect()
    }

    /// Insert a new node. Ignored if the id is already present.
    #[instrument(level = "trace", skip(self))]
    pub fn add_item(&mut self, item: TreeItem) {
        if self.index.contains_key(&item.id) {
            debug!(id = %item.id, "id already present, item ignored");
            return;
        }

        let id = item.id.clone();
        let parent = item.parent.clone();
        let slot = self.arena.insert(item);
        self.index.insert(id, slot);
        self.order.push(slot);
        if let Some(parent) = parent {
            self.children.entry(parent).or_default().push(slot);
        }
    }

    /// Replace an existing node. A changed parent moves the node to the end of
    /// the new parent's children. Unknown ids are ignored; cycles are not
    /// rejected here.
    #[instrument(level = "trace", skip(self))]
    pub fn update_item(&mut self, item: TreeItem) {
        let Some(&slot) = self.index.get(&item.id) else {
            debug!(id = %item.id, "unknown id, update ignored");
            return;
        };
        let Some(current) = self.arena.get_mut(slot) else {
            return;
        };

        let old_parent = std::mem::replace(current, item).parent;
        let new_parent = self.arena.get(slot).and_then(|n| n.parent.clone());
        if old_parent != new_parent {
            if let Some(old) = &old_parent {
                self.detach(old, slot);
            }
            if let Some(new) = new_parent {
                debug!(from = ?old_parent, to = %new, "reparenting");
                self.children.entry(new).or_default().push(slot);
            }
        }
    }

    /// Remove a node and all of its descendants. Unknown ids are ignored.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_item<'a>(&mut self, id: impl Lookup<'a>) {
        let Some(id) = id.lookup() else {
            return;
        };
        let Some(&slot) = self.index.get(id) else {
            debug!(%id, "unknown id, remove ignored");
            return;
        };

        if let Some(parent) = self.arena.get(slot).and_then(|n| n.parent.clone()) {
            self.detach(&parent, slot);
        }

        let doomed = self.descendant_slots(id);
        let mut removed = 0;
        for slot in doomed.into_iter().chain(std::iter::once(slot)) {
            if let Some(node) = self.arena.remove(slot) {
                self.index.remove(&node.id);
                self.children.remove(&node.id);
                removed += 1;
            }
        }
        debug!(%id, removed, "subtree removed");
        self.compact_order();
    }

    /// Stale slots stay in `order` (iteration skips them) until they
    /// outnumber the live ones.
    fn compact_order(&mut self) {
        if self.order.len() > 2 * self.index.len() {
            self.order.retain(|&slot| self.arena.contains(slot));
            debug!(live = self.order.len(), "insertion order compacted");
        }
    }

    fn child_slots(&self, id: &NodeId) -> &[Index] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn resolve(&self, slots: &[Index]) -> Vec<&TreeItem> {
        slots.iter().filter_map(|&slot| self.arena.get(slot)).collect()
    }

    fn detach(&mut self, parent: &NodeId, slot: Index) {
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.retain(|&s| s != slot);
            if siblings.is_empty() {
                self.children.remove(parent);
            }
        }
    }

    /// Pre-order walk over the children index with an explicit stack.
    ///
    /// Every id is expanded at most once, the start id included. Each node
    /// sits in exactly one children list, so nothing is emitted twice.
    fn descendant_slots(&self, id: &NodeId) -> Vec<Index> {
        let mut result = Vec::new();
        let mut expanded: HashSet<&NodeId> = HashSet::from([id]);
        // Push children in reverse order for left-to-right traversal
        let mut stack: Vec<Index> = self.child_slots(id).iter().rev().copied().collect();

        while let Some(slot) = stack.pop() {
            let Some(node) = self.arena.get(slot) else {
                continue;
            };
            result.push(slot);
            if expanded.insert(&node.id) {
                stack.extend(self.child_slots(&node.id).iter().rev().copied());
            }
        }
        result
    }
}
