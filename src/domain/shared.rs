//! Thread-safe handle around a single [`TreeStore`].
//!
//! One mutex guards the whole store, so the primary and children indices are
//! always changed together and no caller sees a half-applied mutation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::store::Lookup;
use crate::domain::{TreeItem, TreeStore};

#[derive(Debug, Clone, Default)]
pub struct SharedTreeStore {
    inner: Arc<Mutex<TreeStore>>,
}

impl From<TreeStore> for SharedTreeStore {
    fn from(store: TreeStore) -> Self {
        Self::new(store)
    }
}

impl SharedTreeStore {
    pub fn new(store: TreeStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Each store call leaves both indices consistent, so the store behind a
    // poisoned guard is still valid between calls.
    fn lock(&self) -> MutexGuard<'_, TreeStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&TreeStore) -> R) -> R {
        f(&*self.lock())
    }

    /// Run `f` with exclusive access under the lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut TreeStore) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.read(TreeStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read(TreeStore::is_empty)
    }

    pub fn get_item<'a>(&self, id: impl Lookup<'a>) -> Option<TreeItem> {
        self.read(|store| store.get_item(id).cloned())
    }

    pub fn get_all(&self) -> Vec<TreeItem> {
        self.read(|store| store.iter().cloned().collect())
    }

    pub fn get_children<'a>(&self, id: impl Lookup<'a>) -> Vec<TreeItem> {
        self.read(|store| store.get_children(id).into_iter().cloned().collect())
    }

    pub fn add_item(&self, item: TreeItem) {
        self.write(|store| store.add_item(item))
    }

    pub fn update_item(&self, item: TreeItem) {
        self.write(|store| store.update_item(item))
    }

    pub fn remove_item<'a>(&self, id: impl Lookup<'a>) {
        self.write(|store| store.remove_item(id))
    }
}
