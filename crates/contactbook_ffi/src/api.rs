//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose contact book use-cases to Dart via FRB.
//! - Validate form input before it reaches the store.
//! - Flatten core results into plain response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every store lives inside a caller-owned `ContactBook`; there is no
//!   process-wide contact state.
//! - Contact ids cross the boundary as canonical uuid strings.

use contactbook_core::{
    color_and_initial, core_version as core_version_inner,
    default_log_level as default_log_level_inner, display_list, favorites_display_list,
    init_logging as init_logging_inner, Contact, ContactId, ContactInput, SharedContactStore,
    StoreConfig,
};
use log::warn;
use uuid::Uuid;

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Log level the app shell should pass to `init_logging` for this build.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Caller-owned contact book session.
///
/// Created once by the app shell and passed to every call below.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    store: SharedContactStore,
}

impl ContactBook {
    /// Empty book with default store options.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty book with options read from the process environment.
    #[flutter_rust_bridge::frb(sync)]
    pub fn from_env() -> Self {
        Self {
            store: SharedContactStore::with_config(StoreConfig::from_env()),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn len(&self) -> u32 {
        u32::try_from(self.store.len()).unwrap_or(u32::MAX)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Form fields collected by the add/edit screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    /// Exactly 10 digits.
    pub phone_number: String,
    /// Exactly 10 digits.
    pub landline: String,
    pub is_favorite: bool,
    /// Image URI from the device picker, if any.
    pub avatar: Option<String>,
}

impl ContactForm {
    fn into_input(self) -> ContactInput {
        ContactInput {
            name: self.name,
            phone_number: self.phone_number,
            landline: self.landline,
            is_favorite: self.is_favorite,
            avatar: self.avatar,
        }
    }
}

/// One list row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub contact_id: String,
    pub name: String,
    pub phone_number: String,
    pub landline: String,
    pub is_favorite: bool,
    pub avatar: Option<String>,
    /// Badge background (`#rrggbb`) used when `avatar` is absent.
    pub badge_color: String,
    /// Badge letter used when `avatar` is absent.
    pub badge_initial: String,
}

/// List response envelope for list/favorites screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    /// Rows in display order.
    pub items: Vec<ContactItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected contact ID, when known.
    pub contact_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ContactActionResponse {
    fn success(message: impl Into<String>, contact_id: ContactId) -> Self {
        Self {
            ok: true,
            contact_id: Some(contact_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            contact_id: None,
            message: message.into(),
        }
    }
}

/// Validates and stores a new contact.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Invalid forms are rejected with the validation message; nothing is stored.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_add(book: &ContactBook, form: ContactForm) -> ContactActionResponse {
    let input = form.into_input();
    if let Err(err) = input.validate() {
        return ContactActionResponse::failure(err.to_string());
    }

    let contact = book.store.add_contact(input);
    ContactActionResponse::success("Contact saved.", contact.id)
}

/// Replaces all editable fields of the contact with `contact_id`.
///
/// # FFI contract
/// - Malformed ids and invalid forms fail without touching the store.
/// - Unknown ids follow the book's missing-record policy.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_update(
    book: &ContactBook,
    contact_id: String,
    form: ContactForm,
) -> ContactActionResponse {
    let id = match parse_contact_id(&contact_id) {
        Ok(id) => id,
        Err(message) => return ContactActionResponse::failure(message),
    };
    let updated = Contact::from_input(id, form.into_input());
    if let Err(err) = updated.validate() {
        return ContactActionResponse::failure(err.to_string());
    }

    match book.store.update_contact(updated) {
        Ok(()) => ContactActionResponse::success("Contact updated.", id),
        Err(err) => ContactActionResponse::failure(err.to_string()),
    }
}

/// Flips the favorite flag of one contact.
///
/// Unknown ids never report `ok`, whatever the missing-record policy.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_toggle_favorite(book: &ContactBook, contact_id: String) -> ContactActionResponse {
    let id = match parse_contact_id(&contact_id) {
        Ok(id) => id,
        Err(message) => return ContactActionResponse::failure(message),
    };

    match book.store.toggle_favorite(id) {
        Ok(Some(true)) => ContactActionResponse::success("Added to favorites.", id),
        Ok(Some(false)) => ContactActionResponse::success("Removed from favorites.", id),
        Ok(None) => ContactActionResponse::failure(format!("contact not found: {id}")),
        Err(err) => ContactActionResponse::failure(err.to_string()),
    }
}

/// Deletes one contact. Unknown ids succeed without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_remove(book: &ContactBook, contact_id: String) -> ContactActionResponse {
    match parse_contact_id(&contact_id) {
        Ok(id) => {
            book.store.remove_contact(id);
            ContactActionResponse::success("Contact deleted.", id)
        }
        Err(message) => ContactActionResponse::failure(message),
    }
}

/// Contact list screen rows: name search, then name order.
///
/// `query` is matched as typed; surrounding whitespace is significant.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_list(book: &ContactBook, query: String) -> ContactListResponse {
    let contacts = book
        .store
        .read(|contacts| display_list(contacts, query.as_str()));
    to_list_response(contacts)
}

/// Favorites screen rows in name order.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_favorites(book: &ContactBook) -> ContactListResponse {
    let contacts = book.store.read(favorites_display_list);
    to_list_response(contacts)
}

fn parse_contact_id(raw: &str) -> Result<ContactId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| {
        warn!("event=contact_id_parse module=ffi status=error error={err}");
        format!("invalid contact id `{}`: {err}", raw.trim())
    })
}

fn to_list_response(contacts: Vec<Contact>) -> ContactListResponse {
    let items = contacts
        .into_iter()
        .map(to_contact_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No contacts.".to_string()
    } else {
        format!("{} contact(s).", items.len())
    };
    ContactListResponse { items, message }
}

fn to_contact_item(contact: Contact) -> ContactItem {
    let badge = color_and_initial(&contact.name);
    ContactItem {
        contact_id: contact.id.to_string(),
        name: contact.name,
        phone_number: contact.phone_number,
        landline: contact.landline,
        is_favorite: contact.is_favorite,
        avatar: contact.avatar,
        badge_color: badge.color.to_string(),
        badge_initial: badge.initial,
    }
}
