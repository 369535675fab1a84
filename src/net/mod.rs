//! Networking modules for the booking REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the room directory and slot client seams plus their HTTP
//! implementation, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
