//! Microservice-call transport.
//!
//! Sends the payload to `conversation` / `message` / `create` and forwards
//! the tenant as a `janis-client` header. Failures, and replies without a
//! body, are wrapped into [`ConversationError::MicroserviceCall`].

use crate::conversation::{
    config::{ConversationConfig, DEFAULT_METHOD, DEFAULT_NAMESPACE, DEFAULT_SERVICE},
    error::{ConversationError, ConversationResult, InvokerError},
    ports::{Dispatch, MessageTransport, MicroserviceInvoker, MicroserviceRequest},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Header carrying the tenant client code.
pub const CLIENT_HEADER: &str = "janis-client";

/// Identifier of a conversation created by the service.
///
/// The id is copied from the response body as the service sent it, so it may
/// be absent or of any JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedConversation {
    /// Conversation id assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl CreatedConversation {
    /// Returns the id when the service sent it as a string.
    #[must_use]
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().and_then(Value::as_str)
    }
}

/// Transport that delivers conversations through a microservice call.
#[derive(Debug)]
pub struct MicroserviceCallTransport<I>
where
    I: MicroserviceInvoker + ?Sized,
{
    invoker: Arc<I>,
    service: String,
    namespace: String,
    method: String,
}

impl<I> Clone for MicroserviceCallTransport<I>
where
    I: MicroserviceInvoker + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            invoker: Arc::clone(&self.invoker),
            service: self.service.clone(),
            namespace: self.namespace.clone(),
            method: self.method.clone(),
        }
    }
}

impl<I> MicroserviceCallTransport<I>
where
    I: MicroserviceInvoker + ?Sized,
{
    /// Creates a transport targeting the default conversation endpoint.
    #[must_use]
    pub fn new(invoker: Arc<I>) -> Self {
        Self {
            invoker,
            service: DEFAULT_SERVICE.to_owned(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
            method: DEFAULT_METHOD.to_owned(),
        }
    }

    /// Creates a transport targeting the endpoint named in `config`.
    #[must_use]
    pub fn from_config(invoker: Arc<I>, config: &ConversationConfig) -> Self {
        Self {
            invoker,
            service: config.service.clone(),
            namespace: config.namespace.clone(),
            method: config.method.clone(),
        }
    }

    fn build_request(&self, dispatch: Dispatch) -> MicroserviceRequest {
        let Dispatch {
            client_code,
            payload,
            session,
        } = dispatch;

        let mut headers = BTreeMap::new();
        if let Some(code) = client_code.filter(|code| !code.is_empty()) {
            headers.insert(CLIENT_HEADER.to_owned(), code);
        }

        MicroserviceRequest {
            service: self.service.clone(),
            namespace: self.namespace.clone(),
            method: self.method.clone(),
            payload: payload.to_payload(),
            headers,
            session,
        }
    }
}

#[async_trait]
impl<I> MessageTransport for MicroserviceCallTransport<I>
where
    I: MicroserviceInvoker + ?Sized,
{
    type Output = CreatedConversation;

    fn name(&self) -> &'static str {
        "microservice-call"
    }

    async fn deliver(&self, dispatch: Dispatch) -> ConversationResult<Self::Output> {
        let request = self.build_request(dispatch);
        let response = self.invoker.call(request).await.map_err(|err| {
            warn!(error = %err, status = ?err.status_code(), "conversation microservice call failed");
            ConversationError::microservice_call(&err)
        })?;

        if response.body.is_null() {
            let err = InvokerError::unavailable(format!(
                "conversation service response (status {}) has no body",
                response.status_code
            ));
            warn!(error = %err, "conversation microservice call returned no body");
            return Err(ConversationError::microservice_call(&err));
        }

        Ok(CreatedConversation {
            id: response.body.get("id").cloned(),
        })
    }
}
