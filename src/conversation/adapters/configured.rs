//! Transport chosen at runtime from [`ConversationConfig`].

use super::{CreatedConversation, FunctionInvocationTransport, MicroserviceCallTransport};
use crate::conversation::{
    config::{ConversationConfig, TransportKind},
    error::ConversationResult,
    ports::{Dispatch, FunctionInvoker, InvokerResult, MessageTransport, MicroserviceInvoker},
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Result of sending through a [`ConfiguredTransport`].
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// The microservice call created a conversation.
    Created(CreatedConversation),
    /// Raw function invocation result, failures included.
    Invoked(InvokerResult<Value>),
}

impl DispatchOutcome {
    /// Returns the created conversation id, when the microservice call
    /// answered with a string one.
    #[must_use]
    pub fn created_id(&self) -> Option<&str> {
        match self {
            Self::Created(created) => created.id_str(),
            Self::Invoked(_) => None,
        }
    }
}

/// Either transport, selected by configuration.
#[derive(Clone)]
pub enum ConfiguredTransport {
    /// Delivers through a microservice call.
    MicroserviceCall(MicroserviceCallTransport<dyn MicroserviceInvoker>),
    /// Delivers through a function invocation.
    FunctionInvocation(FunctionInvocationTransport<dyn FunctionInvoker>),
}

impl ConfiguredTransport {
    /// Builds the transport `config` selects, wired to the matching invoker.
    #[must_use]
    pub fn from_config(
        config: &ConversationConfig,
        microservice: Arc<dyn MicroserviceInvoker>,
        function: Arc<dyn FunctionInvoker>,
    ) -> Self {
        match config.transport {
            TransportKind::MicroserviceCall => Self::MicroserviceCall(
                MicroserviceCallTransport::from_config(microservice, config),
            ),
            TransportKind::FunctionInvocation => Self::FunctionInvocation(
                FunctionInvocationTransport::from_config(function, config),
            ),
        }
    }

    /// Returns which transport is in use.
    #[must_use]
    pub const fn kind(&self) -> TransportKind {
        match self {
            Self::MicroserviceCall(_) => TransportKind::MicroserviceCall,
            Self::FunctionInvocation(_) => TransportKind::FunctionInvocation,
        }
    }
}

#[async_trait]
impl MessageTransport for ConfiguredTransport {
    type Output = DispatchOutcome;

    fn name(&self) -> &'static str {
        match self {
            Self::MicroserviceCall(inner) => inner.name(),
            Self::FunctionInvocation(inner) => inner.name(),
        }
    }

    fn requires_client_code(&self) -> bool {
        match self {
            Self::MicroserviceCall(inner) => inner.requires_client_code(),
            Self::FunctionInvocation(inner) => inner.requires_client_code(),
        }
    }

    async fn deliver(&self, dispatch: Dispatch) -> ConversationResult<Self::Output> {
        match self {
            Self::MicroserviceCall(inner) => {
                inner.deliver(dispatch).await.map(DispatchOutcome::Created)
            }
            Self::FunctionInvocation(inner) => {
                inner.deliver(dispatch).await.map(DispatchOutcome::Invoked)
            }
        }
    }
}
