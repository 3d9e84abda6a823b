//! Port trait definitions for the conversation subsystem.
//!
//! Transports are what the builder talks to; invokers are what transports
//! talk to.

pub mod invoker;
pub mod transport;

pub use invoker::{
    FunctionInvocation, FunctionInvoker, InvokerResult, MicroserviceInvoker, MicroserviceRequest,
    MicroserviceResponse,
};
pub use transport::{Dispatch, MessageTransport};
