//! Backend-facing types.
//!
//! SYSTEM CONTEXT
//! ==============
//! This slice makes no requests of its own; `types` only describes payloads
//! the auth provider may hold.

pub mod types;
