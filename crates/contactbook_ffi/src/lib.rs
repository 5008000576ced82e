//! Flutter bridge surface for the contact book core.

pub mod api;
