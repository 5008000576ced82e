//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its id-less input shape.
//! - Provide caller-side validation used by UI/FFI layers before writes.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes afterwards.
//! - Phone numbers are exactly 10 ASCII digits once validated.
//! - The store never calls `validate()`; validation is a caller contract.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static PHONE_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// Stable identifier of a stored contact.
pub type ContactId = Uuid;

/// Validation error for contact form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Name is empty or whitespace only.
    EmptyName,
    /// Mobile number is not exactly 10 digits.
    InvalidPhoneNumber(String),
    /// Landline number is not exactly 10 digits.
    InvalidLandline(String),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name must not be empty"),
            Self::InvalidPhoneNumber(value) => {
                write!(f, "phone number `{value}` must be exactly 10 digits")
            }
            Self::InvalidLandline(value) => {
                write!(f, "landline `{value}` must be exactly 10 digits")
            }
        }
    }
}

impl Error for ContactValidationError {}

/// Caller-assembled contact fields, before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: String,
    pub phone_number: String,
    pub landline: String,
    pub is_favorite: bool,
    /// Image URI chosen by the UI; `None` renders a generated badge.
    pub avatar: Option<String>,
}

impl ContactInput {
    /// Creates input with the required fields; favorite off, no avatar.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        landline: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            landline: landline.into(),
            is_favorite: false,
            avatar: None,
        }
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn avatar(mut self, uri: impl Into<String>) -> Self {
        self.avatar = Some(uri.into());
        self
    }

    /// Checks the form rules the add/edit screens enforce.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank after trimming.
    /// - `InvalidPhoneNumber` / `InvalidLandline` when a number is not
    ///   exactly 10 digits. Name is checked first.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.phone_number, &self.landline)
    }
}

/// Canonical stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone_number: String,
    pub landline: String,
    pub is_favorite: bool,
    pub avatar: Option<String>,
}

impl Contact {
    /// Attaches an id to input fields.
    ///
    /// Used by the store on add and by import paths with external ids.
    pub fn from_input(id: ContactId, input: ContactInput) -> Self {
        Self {
            id,
            name: input.name,
            phone_number: input.phone_number,
            landline: input.landline,
            is_favorite: input.is_favorite,
            avatar: input.avatar,
        }
    }

    /// Drops the id, e.g. to prefill an edit form.
    pub fn into_input(self) -> ContactInput {
        ContactInput {
            name: self.name,
            phone_number: self.phone_number,
            landline: self.landline,
            is_favorite: self.is_favorite,
            avatar: self.avatar,
        }
    }

    /// Returns a copy with `is_favorite` set, ready for `update_contact`.
    pub fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }

    pub fn toggled_favorite(&self) -> Self {
        self.with_favorite(!self.is_favorite)
    }

    pub fn has_avatar(&self) -> bool {
        self.avatar.is_some()
    }

    /// Same rules as [`ContactInput::validate`].
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.phone_number, &self.landline)
    }
}

fn validate_fields(
    name: &str,
    phone_number: &str,
    landline: &str,
) -> Result<(), ContactValidationError> {
    if name.trim().is_empty() {
        return Err(ContactValidationError::EmptyName);
    }
    if !PHONE_DIGITS_RE.is_match(phone_number) {
        return Err(ContactValidationError::InvalidPhoneNumber(
            phone_number.to_string(),
        ));
    }
    if !PHONE_DIGITS_RE.is_match(landline) {
        return Err(ContactValidationError::InvalidLandline(landline.to_string()));
    }
    Ok(())
}
