//! Generated avatar badge for contacts without an image.
//!
//! # Invariants
//! - The badge is a pure function of the name.
//! - Palette order and the code-unit sum must stay fixed; rendered colors
//!   are expected to match across releases.

use crate::model::contact::Contact;

/// Badge background palette. Duplicated entries are intentional.
pub const AVATAR_PALETTE: [&str; 21] = [
    "#3498db", "#e74c3c", "#2ecc71", "#f39c12", "#9b59b6", "#34495e", "#1abc9c", "#e67e22",
    "#3498db", "#95a5a6", "#16a085", "#d35400", "#c0392b", "#2980b9", "#8e44ad", "#2c3e50",
    "#f39c12", "#d35400", "#2c3e50", "#8e44ad", "#16a085",
];

/// Background color and initial rendered in place of an avatar image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarBadge {
    pub color: &'static str,
    /// First character of the name; empty for an empty name.
    pub initial: String,
}

/// Computes the badge for `name`.
///
/// The palette index is the sum of the name's UTF-16 code units modulo the
/// palette size, so non-BMP characters contribute both surrogates.
pub fn color_and_initial(name: &str) -> AvatarBadge {
    AvatarBadge {
        color: AVATAR_PALETTE[palette_index(name)],
        initial: name.chars().next().map(String::from).unwrap_or_default(),
    }
}

/// Whether `contact` renders a generated badge instead of its avatar.
pub fn needs_generated_avatar(contact: &Contact) -> bool {
    !contact.has_avatar()
}

fn palette_index(name: &str) -> usize {
    let sum = name
        .encode_utf16()
        .fold(0u64, |acc, unit| acc + u64::from(unit));
    (sum % AVATAR_PALETTE.len() as u64) as usize
}
