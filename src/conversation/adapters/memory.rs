//! In-memory invokers that record calls and replay scripted replies.
//!
//! These adapters perform no I/O. They suit unit and integration tests and
//! local runs where the conversation service is not reachable.

use crate::conversation::{
    error::InvokerError,
    ports::{
        FunctionInvocation, FunctionInvoker, InvokerResult, MicroserviceInvoker,
        MicroserviceRequest, MicroserviceResponse,
    },
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
enum MicroserviceReply {
    SequentialIds,
    Fixed(InvokerResult<MicroserviceResponse>),
}

#[derive(Debug)]
struct MicroserviceState {
    reply: MicroserviceReply,
    calls: Vec<MicroserviceRequest>,
}

/// Microservice invoker that records every request.
///
/// By default each call succeeds with status `201` and a body
/// `{"id": "conversation-<n>"}`, `n` counting from 1.
#[derive(Debug, Clone)]
pub struct RecordingMicroserviceInvoker {
    state: Arc<RwLock<MicroserviceState>>,
}

impl Default for RecordingMicroserviceInvoker {
    fn default() -> Self {
        Self::with_reply(MicroserviceReply::SequentialIds)
    }
}

impl RecordingMicroserviceInvoker {
    /// Creates an invoker that answers with sequential conversation ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an invoker that always answers with `response`.
    #[must_use]
    pub fn replying(response: MicroserviceResponse) -> Self {
        Self::with_reply(MicroserviceReply::Fixed(Ok(response)))
    }

    /// Creates an invoker whose calls always fail with `error`.
    #[must_use]
    pub fn failing(error: InvokerError) -> Self {
        Self::with_reply(MicroserviceReply::Fixed(Err(error)))
    }

    fn with_reply(reply: MicroserviceReply) -> Self {
        Self {
            state: Arc::new(RwLock::new(MicroserviceState {
                reply,
                calls: Vec::new(),
            })),
        }
    }

    /// Returns every request received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`InvokerError::Runtime`] when lock acquisition fails.
    pub fn calls(&self) -> InvokerResult<Vec<MicroserviceRequest>> {
        Ok(read(&self.state)?.calls.clone())
    }
}

#[async_trait]
impl MicroserviceInvoker for RecordingMicroserviceInvoker {
    async fn call(&self, request: MicroserviceRequest) -> InvokerResult<MicroserviceResponse> {
        let mut state = write(&self.state)?;
        state.calls.push(request);
        match &state.reply {
            MicroserviceReply::SequentialIds => Ok(MicroserviceResponse::new(
                201,
                json!({ "id": format!("conversation-{}", state.calls.len()) }),
            )),
            MicroserviceReply::Fixed(reply) => reply.clone(),
        }
    }
}

#[derive(Debug)]
struct FunctionState {
    reply: InvokerResult<Value>,
    invocations: Vec<FunctionInvocation>,
}

/// Function invoker that records every invocation.
///
/// By default each invocation succeeds with `{"statusCode": 200}`.
#[derive(Debug, Clone)]
pub struct RecordingFunctionInvoker {
    state: Arc<RwLock<FunctionState>>,
}

impl Default for RecordingFunctionInvoker {
    fn default() -> Self {
        Self::with_reply(Ok(json!({ "statusCode": 200 })))
    }
}

impl RecordingFunctionInvoker {
    /// Creates an invoker that answers `{"statusCode": 200}`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an invoker that always answers with `reply`.
    #[must_use]
    pub fn with_reply(reply: InvokerResult<Value>) -> Self {
        Self {
            state: Arc::new(RwLock::new(FunctionState {
                reply,
                invocations: Vec::new(),
            })),
        }
    }

    /// Returns every invocation received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`InvokerError::Runtime`] when lock acquisition fails.
    pub fn invocations(&self) -> InvokerResult<Vec<FunctionInvocation>> {
        Ok(read(&self.state)?.invocations.clone())
    }
}

#[async_trait]
impl FunctionInvoker for RecordingFunctionInvoker {
    async fn invoke(&self, invocation: FunctionInvocation) -> InvokerResult<Value> {
        let mut state = write(&self.state)?;
        state.invocations.push(invocation);
        state.reply.clone()
    }
}

fn read<T>(lock: &RwLock<T>) -> InvokerResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|err| InvokerError::runtime(std::io::Error::other(err.to_string())))
}

fn write<T>(lock: &RwLock<T>) -> InvokerResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|err| InvokerError::runtime(std::io::Error::other(err.to_string())))
}
