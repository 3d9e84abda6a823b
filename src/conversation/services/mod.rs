//! Application services for the conversation subsystem.

mod builder;

pub use builder::Conversation;
