//! Janis messaging: builds conversation requests and delivers them to the
//! conversation service.
//!
//! The crate is a thin client. It validates what callers assemble and
//! forwards it through a pluggable transport; the actual remote call is
//! performed by an invoker supplied by the caller.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure request types with no transport dependencies
//! - **Ports**: Abstract transport and invoker traits
//! - **Adapters**: Concrete transports and in-memory invokers
//!
//! # Modules
//!
//! - [`conversation`]: Conversation building, validation and dispatch

pub mod conversation;
