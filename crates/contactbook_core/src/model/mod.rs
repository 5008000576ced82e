//! Contact domain model.
//!
//! # Responsibility
//! - Define the record shapes shared by store, views and FFI callers.
//!
//! # Invariants
//! - Every stored contact is identified by a stable `ContactId`.
//! - Removal is a hard delete; there are no tombstones.

pub mod contact;
