//! SharedTreeStore under concurrent use.

use std::thread;

use treestore::domain::{NodeId, SharedTreeStore, TreeItem, TreeStore};

#[test]
fn given_threads_adding_when_joined_then_all_items_present() {
    let shared = SharedTreeStore::new(TreeStore::new([TreeItem::root(0, "root")]));

    let handles: Vec<_> = (1..=4)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    let id = t * 1000 + i;
                    shared.add_item(TreeItem::child(id, 0, format!("item {id}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.len(), 201);
    assert_eq!(shared.get_children(&NodeId::Int(0)).len(), 200);
}

#[test]
fn given_concurrent_cascade_when_reading_then_counts_stay_consistent() {
    let items = std::iter::once(TreeItem::root(0, "root"))
        .chain((1..100).map(|i| TreeItem::child(i, i - 1, format!("level {i}"))));
    let shared = SharedTreeStore::from(TreeStore::new(items));

    let remover = {
        let shared = shared.clone();
        thread::spawn(move || shared.remove_item(&NodeId::Int(50)))
    };
    // Every observation is either before or after the cascade
    for _ in 0..100 {
        let len = shared.read(|store| store.len());
        assert!(len == 100 || len == 50, "partial cascade observed: {len}");
    }
    remover.join().unwrap();

    assert_eq!(shared.len(), 50);
    assert!(shared.get_item(&NodeId::Int(99)).is_none());
    assert_eq!(shared.get_all().last().map(|i| i.id.clone()), Some(NodeId::Int(49)));
}

#[test]
fn given_update_through_handle_when_reading_then_visible_to_clones() {
    let shared = SharedTreeStore::default();
    let other = shared.clone();
    shared.add_item(TreeItem::root("a", "A"));
    other.update_item(TreeItem::root("a", "renamed"));

    assert_eq!(shared.get_item(&NodeId::from("a")).unwrap().label, "renamed");
    assert!(!other.is_empty());
}

#[test]
fn given_panicking_writer_when_reading_afterwards_then_store_still_usable() {
    let shared = SharedTreeStore::new(TreeStore::new([
        TreeItem::root(1, "a"),
        TreeItem::child(2, 1, "b"),
    ]));

    let handle = shared.clone();
    let result = thread::spawn(move || {
        handle.write(|store| {
            store.remove_item(&NodeId::from(2));
            panic!("caller closure failed after a completed store call");
        })
    })
    .join();
    assert!(result.is_err());

    assert_eq!(shared.len(), 1);
    assert!(shared.get_children(&NodeId::from(1)).is_empty());
    shared.add_item(TreeItem::child(3, 1, "c"));
    assert_eq!(shared.get_children(&NodeId::from(1)).len(), 1);
}
