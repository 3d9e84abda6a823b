//! Domain types for conversation requests.
//!
//! These types are free of transport concerns: they describe what is sent,
//! not how.

mod field;
mod request;
mod session;

pub use field::ConversationField;
pub use request::{ConversationRequest, is_falsy};
pub use session::Session;
