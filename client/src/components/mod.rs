//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page chrome shared across routes. Components receive state as props
//! rather than pulling it from context.

pub mod footer;
pub mod navbar;
