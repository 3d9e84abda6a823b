//! Transport port: how an assembled conversation leaves the process.

use crate::conversation::{
    domain::{ConversationRequest, Session},
    error::ConversationResult,
};
use async_trait::async_trait;

/// A validated conversation ready to be delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Resolved tenant client code.
    pub client_code: Option<String>,
    /// Payload body; never contains the client code.
    pub payload: ConversationRequest,
    /// Session attached to the builder, if any.
    pub session: Option<Session>,
}

/// Delivers conversations to the conversation service.
///
/// Implementations differ in what they return and in how they surface
/// remote failures; see the adapters for each contract.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Value returned to the caller of
    /// [`Conversation::send`](crate::conversation::services::Conversation::send).
    type Output: Send;

    /// Short transport name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` when the transport needs a client code and the builder
    /// should fall back to the session's one.
    fn requires_client_code(&self) -> bool {
        false
    }

    /// Delivers the conversation with exactly one remote call.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversationError`](crate::conversation::error::ConversationError)
    /// when the transport reports failures as errors.
    async fn deliver(&self, dispatch: Dispatch) -> ConversationResult<Self::Output>;
}
