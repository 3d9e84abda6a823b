//! Function-invocation transport.
//!
//! Invokes the conversation service's function with the client code as a
//! positional argument. The invoker's result, success or failure, is
//! returned to the caller as is; nothing is wrapped into a
//! [`ConversationError`](crate::conversation::error::ConversationError).

use crate::conversation::{
    config::{ConversationConfig, DEFAULT_FUNCTION, DEFAULT_SERVICE},
    error::ConversationResult,
    ports::{Dispatch, FunctionInvocation, FunctionInvoker, InvokerResult, MessageTransport},
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Transport that delivers conversations through a function invocation.
#[derive(Debug)]
pub struct FunctionInvocationTransport<I>
where
    I: FunctionInvoker + ?Sized,
{
    invoker: Arc<I>,
    service: String,
    function: String,
}

impl<I> Clone for FunctionInvocationTransport<I>
where
    I: FunctionInvoker + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            invoker: Arc::clone(&self.invoker),
            service: self.service.clone(),
            function: self.function.clone(),
        }
    }
}

impl<I> FunctionInvocationTransport<I>
where
    I: FunctionInvoker + ?Sized,
{
    /// Creates a transport targeting the default conversation function.
    #[must_use]
    pub fn new(invoker: Arc<I>) -> Self {
        Self {
            invoker,
            service: DEFAULT_SERVICE.to_owned(),
            function: DEFAULT_FUNCTION.to_owned(),
        }
    }

    /// Creates a transport targeting the function named in `config`.
    #[must_use]
    pub fn from_config(invoker: Arc<I>, config: &ConversationConfig) -> Self {
        Self {
            invoker,
            service: config.service.clone(),
            function: config.function_name.clone(),
        }
    }
}

#[async_trait]
impl<I> MessageTransport for FunctionInvocationTransport<I>
where
    I: FunctionInvoker + ?Sized,
{
    type Output = InvokerResult<Value>;

    fn name(&self) -> &'static str {
        "function-invocation"
    }

    fn requires_client_code(&self) -> bool {
        true
    }

    async fn deliver(&self, dispatch: Dispatch) -> ConversationResult<Self::Output> {
        let invocation = FunctionInvocation {
            service: self.service.clone(),
            function: self.function.clone(),
            client_code: dispatch.client_code,
            payload: dispatch.payload.to_payload(),
            session: dispatch.session,
        };

        let outcome = self.invoker.invoke(invocation).await;
        if let Err(err) = &outcome {
            debug!(error = %err, "conversation function invocation failed; passing result through");
        }
        Ok(outcome)
    }
}
