//! Conversation requests for the Janis conversation service.
//!
//! A [`services::Conversation`] accumulates a topic, template data, the
//! entity it concerns and the user who triggered it, validates field types,
//! and hands the result to a [`ports::MessageTransport`].
//!
//! # Architecture
//!
//! - **Domain**: request, field and session types ([`domain`])
//! - **Ports**: transport and invoker traits ([`ports`])
//! - **Adapters**: microservice-call and function-invocation transports,
//!   plus recording invokers ([`adapters`])
//! - **Validation**: pure field type rules ([`validation`])
//! - **Services**: the builder ([`services`])
//!
//! # Example
//!
//! ```
//! use janis_messaging::conversation::adapters::{
//!     FunctionInvocationTransport, RecordingFunctionInvoker,
//! };
//! use janis_messaging::conversation::domain::Session;
//! use std::sync::Arc;
//!
//! let invoker = Arc::new(RecordingFunctionInvoker::new());
//! let session = Session::new().with_user_id("U1").with_client_code("C1");
//! let conversation = session
//!     .conversation(FunctionInvocationTransport::new(invoker))
//!     .with_topic("order-created")
//!     .with_entity_id(42);
//!
//! assert!(conversation.request().topic.is_some());
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
