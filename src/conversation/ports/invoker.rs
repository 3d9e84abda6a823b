//! Invoker ports: the remote-call collaborators transports delegate to.
//!
//! Connection handling, retries, timeouts and authentication live behind
//! these traits. Requests are owned values so adapters may move them across
//! tasks freely.

use crate::conversation::{domain::Session, error::InvokerError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// A synchronous-style microservice call.
#[derive(Debug, Clone, PartialEq)]
pub struct MicroserviceRequest {
    /// Target service.
    pub service: String,
    /// Namespace within the service.
    pub namespace: String,
    /// Method within the namespace.
    pub method: String,
    /// Request body.
    pub payload: Value,
    /// Extra request headers.
    pub headers: BTreeMap<String, String>,
    /// Session the call is bound to, if any.
    pub session: Option<Session>,
}

/// Response to a microservice call.
#[derive(Debug, Clone, PartialEq)]
pub struct MicroserviceResponse {
    /// Status code reported by the service.
    pub status_code: u16,
    /// Decoded response body.
    pub body: Value,
}

impl MicroserviceResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }
}

/// An asynchronous function invocation against a service.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInvocation {
    /// Target service.
    pub service: String,
    /// Function exposed by the service.
    pub function: String,
    /// Tenant the invocation runs for.
    pub client_code: Option<String>,
    /// Invocation payload.
    pub payload: Value,
    /// Session of the caller, if any.
    pub session: Option<Session>,
}

/// Result type for invoker operations.
pub type InvokerResult<T> = Result<T, InvokerError>;

/// Performs microservice calls.
#[async_trait]
pub trait MicroserviceInvoker: Send + Sync {
    /// Executes the call and returns the service response.
    ///
    /// # Errors
    ///
    /// Returns [`InvokerError`] when the call is rejected or cannot be made.
    async fn call(&self, request: MicroserviceRequest) -> InvokerResult<MicroserviceResponse>;
}

/// Performs function invocations.
#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    /// Invokes the function and returns its raw result.
    ///
    /// # Errors
    ///
    /// Returns [`InvokerError`] when the invocation fails.
    async fn invoke(&self, invocation: FunctionInvocation) -> InvokerResult<Value>;
}
