//! Caller session carrying the authenticated user and tenant.

use serde::{Deserialize, Serialize};

/// Authenticated caller context.
///
/// Only `user_id` and `client_code` influence how a conversation is built;
/// the remaining fields travel with the session to invokers that bind the
/// remote call to it.
///
/// # Examples
///
/// ```
/// use janis_messaging::conversation::domain::Session;
///
/// let session: Session = serde_json::from_str(
///     r#"{"userId": "U1", "clientCode": "fizzmodarg"}"#,
/// ).expect("valid session");
///
/// assert_eq!(session.user_id(), Some("U1"));
/// assert_eq!(session.client_code(), Some("fizzmodarg"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    user_is_dev: bool,
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_code: Option<String>,
    #[serde(default)]
    profile_id: Option<String>,
    #[serde(default)]
    permissions: Vec<String>,
}

impl Session {
    /// Creates an anonymous session with no user and no tenant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authenticated user id.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the tenant client code.
    #[must_use]
    pub fn with_client_code(mut self, client_code: impl Into<String>) -> Self {
        self.client_code = Some(client_code.into());
        self
    }

    /// Sets the tenant client id.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the user's profile id.
    #[must_use]
    pub fn with_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }

    /// Marks the user as a developer.
    #[must_use]
    pub const fn with_developer_flag(mut self, user_is_dev: bool) -> Self {
        self.user_is_dev = user_is_dev;
        self
    }

    /// Replaces the permission list.
    #[must_use]
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = String>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    /// Returns the user id when present and non-empty.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        non_empty(self.user_id.as_deref())
    }

    /// Returns the client code when present and non-empty.
    #[must_use]
    pub fn client_code(&self) -> Option<&str> {
        non_empty(self.client_code.as_deref())
    }

    /// Returns the client id.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Returns the profile id.
    #[must_use]
    pub fn profile_id(&self) -> Option<&str> {
        self.profile_id.as_deref()
    }

    /// Returns `true` when the user is a developer.
    #[must_use]
    pub const fn user_is_dev(&self) -> bool {
        self.user_is_dev
    }

    /// Returns the granted permissions.
    #[must_use]
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
