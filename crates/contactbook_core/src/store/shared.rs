//! Thread-safe handle over one [`ContactStore`].
//!
//! # Invariants
//! - Mutations run under the write lock, one at a time; no update is lost.
//! - Reads run under the read lock and never see a half-applied mutation.
//! - Snapshots handed out are owned copies and never write back.

use crate::model::contact::{Contact, ContactId, ContactInput};
use crate::store::config::StoreConfig;
use crate::store::contact_store::{ContactStore, StoreResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, lock-guarded contact store.
#[derive(Debug, Clone, Default)]
pub struct SharedContactStore {
    inner: Arc<RwLock<ContactStore>>,
}

impl SharedContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_store(ContactStore::with_config(config))
    }

    pub fn from_store(store: ContactStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn add_contact(&self, input: ContactInput) -> Contact {
        self.inner.write().add_contact(input)
    }

    pub fn import_contact(&self, contact: Contact) -> StoreResult<ContactId> {
        self.inner.write().import_contact(contact)
    }

    pub fn update_contact(&self, updated: Contact) -> StoreResult<()> {
        self.inner.write().update_contact(updated)
    }

    pub fn set_favorite(&self, id: ContactId, is_favorite: bool) -> StoreResult<()> {
        self.inner.write().set_favorite(id, is_favorite)
    }

    /// Flips the favorite flag under a single write lock.
    ///
    /// Returns the new flag, or `None` when `id` is unknown.
    pub fn toggle_favorite(&self, id: ContactId) -> StoreResult<Option<bool>> {
        let mut store = self.inner.write();
        let Some(current) = store.get(id).map(|contact| contact.is_favorite) else {
            return store.missing_record(id).map(|()| None);
        };
        store.set_favorite(id, !current)?;
        Ok(Some(!current))
    }

    pub fn remove_contact(&self, id: ContactId) -> bool {
        self.inner.write().remove_contact(id)
    }

    /// Owned snapshot in insertion order.
    pub fn get_all(&self) -> Vec<Contact> {
        self.inner.read().snapshot()
    }

    pub fn get(&self, id: ContactId) -> Option<Contact> {
        self.inner.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` against one consistent view of the collection.
    pub fn read<T>(&self, f: impl FnOnce(&[Contact]) -> T) -> T {
        let store = self.inner.read();
        f(store.get_all())
    }
}
