//! Read-only projections over a contact snapshot.
//!
//! # Responsibility
//! - Shape list screens: name search, favorites subset, display order.
//! - Derive the generated avatar badge for contacts without an image.
//!
//! # Invariants
//! - Every function is pure; input slices are never mutated.

pub mod avatar;
pub mod filter;
