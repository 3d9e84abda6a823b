//! Adapter implementations for conversation ports.
//!
//! - [`microservice`]: delivery through a microservice call
//! - [`function`]: delivery through a function invocation
//! - [`configured`]: one of the above, picked by configuration
//! - [`memory`]: recording invokers for tests and local runs

pub mod configured;
pub mod function;
pub mod memory;
pub mod microservice;

pub use configured::{ConfiguredTransport, DispatchOutcome};
pub use function::FunctionInvocationTransport;
pub use memory::{RecordingFunctionInvoker, RecordingMicroserviceInvoker};
pub use microservice::{CLIENT_HEADER, CreatedConversation, MicroserviceCallTransport};
