//! Error types for conversation building and dispatch.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Every
//! [`ConversationError`] also exposes a stable numeric
//! [`ConversationErrorCode`] and a fixed [`name`](ConversationError::name)
//! for consumers that match on those instead of the variant.

use super::domain::ConversationField;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for conversation operations.
pub type ConversationResult<T> = Result<T, ConversationError>;

/// Stable error codes shared with other consumers of the conversation
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ConversationErrorCode {
    /// A required field is absent. Reserved; no current check raises it.
    RequiredFieldMissing = 1,
    /// A field holds a value of the wrong type.
    InvalidFieldType = 2,
    /// The microservice call failed.
    MsCallError = 3,
}

impl ConversationErrorCode {
    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the symbolic name of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequiredFieldMissing => "REQUIRED_FIELD_MISSING",
            Self::InvalidFieldType => "INVALID_FIELD_TYPE",
            Self::MsCallError => "MS_CALL_ERROR",
        }
    }
}

impl fmt::Display for ConversationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while validating or dispatching a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    /// A field that must be present is missing.
    #[error("Invalid conversation: {0} property is required")]
    RequiredFieldMissing(ConversationField),

    /// A field holds a value of the wrong type.
    #[error("Invalid conversation: {} property must be {}", .0, .0.expected_type())]
    InvalidFieldType(ConversationField),

    /// The microservice transport rejected the call.
    #[error("{message}")]
    MicroserviceCall {
        /// Message of the underlying failure.
        message: String,
    },
}

impl ConversationError {
    /// Fixed name carried by every conversation error.
    pub const NAME: &'static str = "ConversationError";

    /// Wraps a microservice call failure, keeping only its message.
    #[must_use]
    pub fn microservice_call(err: &impl std::error::Error) -> Self {
        Self::MicroserviceCall {
            message: err.to_string(),
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn code(&self) -> ConversationErrorCode {
        match self {
            Self::RequiredFieldMissing(_) => ConversationErrorCode::RequiredFieldMissing,
            Self::InvalidFieldType(_) => ConversationErrorCode::InvalidFieldType,
            Self::MicroserviceCall { .. } => ConversationErrorCode::MsCallError,
        }
    }

    /// Returns the fixed error name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Returns the offending field for validation errors.
    #[must_use]
    pub const fn field(&self) -> Option<ConversationField> {
        match self {
            Self::RequiredFieldMissing(field) | Self::InvalidFieldType(field) => Some(*field),
            Self::MicroserviceCall { .. } => None,
        }
    }
}

/// Errors reported by invoker adapters.
///
/// The microservice transport wraps these into
/// [`ConversationError::MicroserviceCall`]; the function transport hands them
/// back to the caller untouched.
#[derive(Debug, Clone, Error)]
pub enum InvokerError {
    /// The remote side answered with a failure status.
    #[error("{message}")]
    Rejected {
        /// Status code reported by the remote side.
        status_code: u16,
        /// Failure message.
        message: String,
    },

    /// The remote side could not be reached.
    #[error("{0}")]
    Unavailable(String),

    /// Any other runtime failure inside the adapter.
    #[error("{0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl InvokerError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(status_code: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status_code,
            message: message.into(),
        }
    }

    /// Creates an unavailability error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Wraps an arbitrary adapter error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }

    /// Returns the remote status code, if the remote side answered.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Rejected { status_code, .. } => Some(*status_code),
            Self::Unavailable(_) | Self::Runtime(_) => None,
        }
    }
}
