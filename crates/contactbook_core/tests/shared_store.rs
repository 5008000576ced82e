use contactbook_core::{
    favorites_only, Contact, ContactInput, MissingRecordPolicy, SharedContactStore, StoreConfig,
    StoreError,
};
use std::collections::HashSet;
use std::thread;
use uuid::Uuid;

fn input(name: &str) -> ContactInput {
    ContactInput::new(name, "1234567890", "0987654321")
}

#[test]
fn clones_share_one_collection() {
    let store = SharedContactStore::new();
    let other = store.clone();

    let eve = store.add_contact(input("Eve"));
    assert_eq!(other.len(), 1);
    assert_eq!(other.get(eve.id), Some(eve));
}

#[test]
fn concurrent_adds_lose_no_update() {
    let store = SharedContactStore::new();
    let handles = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|i| store.add_contact(input(&format!("w{worker}-{i}"))).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    let ids = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect::<HashSet<_>>();

    assert_eq!(ids.len(), 400);
    assert_eq!(store.len(), 400);
}

#[test]
fn concurrent_toggles_are_serialized() {
    let store = SharedContactStore::new();
    let eve = store.add_contact(input("Eve"));

    let handles = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    store.toggle_favorite(eve.id).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    // 100 flips from false end at false.
    assert_eq!(store.get(eve.id).map(|contact| contact.is_favorite), Some(false));
}

#[test]
fn toggle_unknown_id_follows_policy() {
    let lenient = SharedContactStore::new();
    assert_eq!(lenient.toggle_favorite(Uuid::new_v4()).unwrap(), None);

    let strict = SharedContactStore::with_config(StoreConfig {
        missing_update: MissingRecordPolicy::Reject,
    });
    let id = Uuid::new_v4();
    assert_eq!(strict.toggle_favorite(id).unwrap_err(), StoreError::NotFound(id));
}

#[test]
fn read_sees_one_consistent_snapshot() {
    let store = SharedContactStore::new();
    let ann = store.add_contact(input("Ann").favorite(true));
    store.add_contact(input("Ben"));

    let (total, favorites) =
        store.read(|contacts| (contacts.len(), favorites_only(contacts).len()));
    assert_eq!((total, favorites), (2, 1));

    assert_eq!(store.toggle_favorite(ann.id).unwrap(), Some(false));
    assert!(favorites_only(&store.get_all()).is_empty());
}

#[test]
fn snapshots_are_detached_from_later_writes() {
    let store = SharedContactStore::new();
    let eve = store.add_contact(input("Eve"));
    let snapshot = store.get_all();

    store.remove_contact(eve.id);
    assert_eq!(snapshot.len(), 1);
    assert!(store.is_empty());
}

#[test]
fn import_through_handle_rejects_ids_already_shared() {
    let store = SharedContactStore::new();
    let other = store.clone();
    let eve = store.add_contact(input("Eve"));

    let clash = Contact::from_input(eve.id, input("Mallory"));
    assert_eq!(
        other.import_contact(clash).unwrap_err(),
        StoreError::DuplicateId(eve.id)
    );

    let external = Contact::from_input(Uuid::new_v4(), input("Bob"));
    assert_eq!(other.import_contact(external.clone()).unwrap(), external.id);
    assert_eq!(store.get(external.id), Some(external));
    assert_eq!(store.len(), 2);
}
