//! Unit tests for the conversation module.
//!
//! Tests are organised by concept: validation rules, the builder's dispatch
//! contract, each transport, configuration and error codes.

mod builder_tests;
mod validation_tests;
