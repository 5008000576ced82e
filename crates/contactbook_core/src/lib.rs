//! Core domain logic for the contact book.
//! This crate owns the contact collection and every view derived from it;
//! screens, navigation and media picking live outside.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId, ContactInput, ContactValidationError};
pub use store::config::{MissingRecordPolicy, StoreConfig, MISSING_UPDATE_ENV};
pub use store::contact_store::{ContactStore, StoreError, StoreResult};
pub use store::shared::SharedContactStore;
pub use view::avatar::{color_and_initial, needs_generated_avatar, AvatarBadge, AVATAR_PALETTE};
pub use view::filter::{
    compare_names, display_list, favorites_display_list, favorites_only, filter_by_name,
    sorted_by_name,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
