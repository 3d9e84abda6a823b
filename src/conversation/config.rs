//! Deployment configuration for conversation dispatch.
//!
//! The transport defaults to whatever suits the runtime the process is
//! deployed to: code running inside a function runtime invokes the
//! conversation service's function directly, everything else goes through a
//! microservice call. Explicit settings override detection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable that forces a transport.
pub const TRANSPORT_ENV: &str = "JANIS_CONVERSATION_TRANSPORT";

/// Environment variable present inside a function runtime.
pub const FUNCTION_RUNTIME_ENV: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Default conversation service name.
pub const DEFAULT_SERVICE: &str = "conversation";

/// Default namespace for microservice calls.
pub const DEFAULT_NAMESPACE: &str = "message";

/// Default method for microservice calls.
pub const DEFAULT_METHOD: &str = "create";

/// Default function for function invocations.
pub const DEFAULT_FUNCTION: &str = "CreateMessage";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The transport name is not recognised.
    #[error("unknown conversation transport '{0}'")]
    UnknownTransport(String),
}

/// How conversations reach the conversation service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportKind {
    /// Synchronous-style microservice call.
    #[default]
    MicroserviceCall,
    /// Function invocation.
    FunctionInvocation,
}

impl TransportKind {
    /// Picks a transport from the environment seen through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTransport`] when the override variable
    /// holds an unrecognised name.
    pub fn detect(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(explicit) = lookup(TRANSPORT_ENV).filter(|value| !value.trim().is_empty()) {
            return explicit.parse();
        }

        let in_function_runtime = lookup(FUNCTION_RUNTIME_ENV).is_some_and(|name| !name.is_empty());
        Ok(if in_function_runtime {
            Self::FunctionInvocation
        } else {
            Self::MicroserviceCall
        })
    }

    /// Returns the configuration name of the transport.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MicroserviceCall => "microservice-call",
            Self::FunctionInvocation => "function-invocation",
        }
    }
}

impl FromStr for TransportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "microservice-call" | "microservice" => Ok(Self::MicroserviceCall),
            "function-invocation" | "function" | "lambda" => Ok(Self::FunctionInvocation),
            other => Err(ConfigError::UnknownTransport(other.to_owned())),
        }
    }
}

/// Where and how conversations are dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Selected transport.
    #[serde(default)]
    pub transport: TransportKind,

    /// Conversation service name.
    #[serde(default = "default_service")]
    pub service: String,

    /// Namespace used by microservice calls.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Method used by microservice calls.
    #[serde(default = "default_method")]
    pub method: String,

    /// Function used by function invocations.
    #[serde(default = "default_function")]
    pub function_name: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            service: default_service(),
            namespace: default_namespace(),
            method: default_method(),
            function_name: default_function(),
        }
    }
}

impl ConversationConfig {
    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`TransportKind::detect`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`TransportKind::detect`].
    ///
    /// # Examples
    ///
    /// ```
    /// use janis_messaging::conversation::config::{ConversationConfig, TransportKind};
    ///
    /// let config = ConversationConfig::from_lookup(|key| {
    ///     (key == "AWS_LAMBDA_FUNCTION_NAME").then(|| "orders-notify".to_owned())
    /// })
    /// .expect("valid environment");
    ///
    /// assert_eq!(config.transport, TransportKind::FunctionInvocation);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            transport: TransportKind::detect(lookup)?,
            ..Self::default()
        })
    }

    /// Overrides the transport.
    #[must_use]
    pub const fn with_transport(mut self, transport: TransportKind) -> Self {
        self.transport = transport;
        self
    }
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_owned()
}
fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}
fn default_method() -> String {
    DEFAULT_METHOD.to_owned()
}
fn default_function() -> String {
    DEFAULT_FUNCTION.to_owned()
}
