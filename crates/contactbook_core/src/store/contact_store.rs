//! Owned contact store.
//!
//! # Responsibility
//! - Hold the ordered contact collection for one UI session.
//! - Apply add/update/remove synchronously, one transition at a time.
//!
//! # Invariants
//! - `add_contact` always generates a fresh v4 id; callers never pick ids.
//! - `import_contact` rejects nil and duplicate ids.
//! - `update_contact` keeps position and id; unmatched ids never mutate state.
//! - `remove_contact` is idempotent and never fails.

use crate::model::contact::{Contact, ContactId, ContactInput};
use crate::store::config::{MissingRecordPolicy, StoreConfig};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for id reference problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(ContactId),
    DuplicateId(ContactId),
    NilId,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::DuplicateId(id) => write!(f, "contact id already exists: {id}"),
            Self::NilId => write!(f, "contact id must not be nil"),
        }
    }
}

impl Error for StoreError {}

/// In-memory contact collection in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    config: StoreConfig,
}

impl ContactStore {
    /// Creates an empty store with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            contacts: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Appends a new contact and returns the stored record.
    ///
    /// The input is stored as given; validation is the caller's job.
    pub fn add_contact(&mut self, input: ContactInput) -> Contact {
        let mut id = Uuid::new_v4();
        while self.position(id).is_some() {
            id = Uuid::new_v4();
        }

        let contact = Contact::from_input(id, input);
        self.contacts.push(contact.clone());
        debug!(
            "event=contact_add module=store status=ok id={} total={}",
            id,
            self.contacts.len()
        );
        contact
    }

    /// Appends a contact whose id was assigned elsewhere.
    ///
    /// # Errors
    /// - `NilId` when `contact.id` is the nil uuid.
    /// - `DuplicateId` when a record with the same id is already stored.
    pub fn import_contact(&mut self, contact: Contact) -> StoreResult<ContactId> {
        if contact.id.is_nil() {
            return Err(StoreError::NilId);
        }
        if self.position(contact.id).is_some() {
            debug!(
                "event=contact_import module=store status=rejected reason=duplicate id={}",
                contact.id
            );
            return Err(StoreError::DuplicateId(contact.id));
        }

        let id = contact.id;
        self.contacts.push(contact);
        debug!("event=contact_import module=store status=ok id={id}");
        Ok(id)
    }

    /// Replaces every field of the record with `updated.id`, in place.
    ///
    /// # Errors
    /// - `NotFound` for an unmatched id, only under
    ///   `MissingRecordPolicy::Reject`. Under `Ignore` it is a no-op.
    pub fn update_contact(&mut self, updated: Contact) -> StoreResult<()> {
        let Some(index) = self.position(updated.id) else {
            debug!(
                "event=contact_update module=store status=missing policy={} id={}",
                self.config.missing_update.as_str(),
                updated.id
            );
            return self.missing_record(updated.id);
        };

        debug!(
            "event=contact_update module=store status=ok id={}",
            updated.id
        );
        self.contacts[index] = updated;
        Ok(())
    }

    /// Sets the favorite flag of one record.
    ///
    /// Field-level shortcut over [`Self::update_contact`]; same missing-id
    /// policy applies.
    pub fn set_favorite(&mut self, id: ContactId, is_favorite: bool) -> StoreResult<()> {
        match self.get(id) {
            Some(current) => {
                let updated = current.with_favorite(is_favorite);
                self.update_contact(updated)
            }
            None => self.missing_record(id),
        }
    }

    /// Removes the record with `id` if present.
    ///
    /// Returns whether a record was removed; absent ids are not an error.
    pub fn remove_contact(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        let removed = self.contacts.len() != before;
        debug!(
            "event=contact_remove module=store status=ok removed={} id={}",
            removed, id
        );
        removed
    }

    /// Current snapshot in insertion order.
    pub fn get_all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Outcome for a write that referenced an unknown id.
    pub(crate) fn missing_record(&self, id: ContactId) -> StoreResult<()> {
        match self.config.missing_update {
            MissingRecordPolicy::Ignore => Ok(()),
            MissingRecordPolicy::Reject => Err(StoreError::NotFound(id)),
        }
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id == id)
    }
}
