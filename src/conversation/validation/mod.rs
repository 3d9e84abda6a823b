//! Conversation validation.
//!
//! Validation is a set of pure functions, kept apart from the builder so it
//! can be exercised on its own.

pub mod rules;

pub use rules::validate_field_types;
