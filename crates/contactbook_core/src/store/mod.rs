//! Authoritative in-memory contact storage.
//!
//! # Responsibility
//! - Own the contact collection and apply add/update/remove transitions.
//! - Offer a lock-guarded handle for callers that dispatch from many threads.
//!
//! # Invariants
//! - Contact ids are unique across the collection at all times.
//! - Iteration order is insertion order; updates keep a record's position.
//! - State is memory-only and is dropped with the store.

pub mod config;
pub mod contact_store;
pub mod shared;
