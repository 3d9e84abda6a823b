//! The conversation payload accumulated by the builder.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::FpCategory;

/// Payload sent to the conversation service.
///
/// Every field is optional and dynamically typed; type rules are enforced by
/// [`validate_field_types`](crate::conversation::validation::rules::validate_field_types)
/// right before dispatch, never at set-time. Absent fields are omitted from
/// the serialized form, so an empty request serializes to `{}`.
///
/// The tenant client code is deliberately not a member: transports carry it
/// in a header or as a positional argument.
///
/// # Examples
///
/// ```
/// use janis_messaging::conversation::domain::ConversationRequest;
/// use serde_json::json;
///
/// let request = ConversationRequest::new();
/// assert_eq!(request.to_payload(), json!({}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    /// Template selector; must be a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Value>,

    /// Template substitution payload; must be an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Entity the conversation concerns; string or number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Value>,

    /// Identifier of the entity; string or number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<Value>,

    /// Id of the user who triggered the conversation; must be a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_created: Option<Value>,
}

impl ConversationRequest {
    /// Creates an empty request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            topic: None,
            data: None,
            entity: None,
            entity_id: None,
            user_created: None,
        }
    }

    /// Returns `true` when no field has been set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.topic.is_none()
            && self.data.is_none()
            && self.entity.is_none()
            && self.entity_id.is_none()
            && self.user_created.is_none()
    }

    /// Returns `true` when `user_created` should be filled from a session.
    ///
    /// Absent and falsy values (`null`, `false`, `0`, `""`) both count as
    /// unset.
    #[must_use]
    pub fn lacks_user_created(&self) -> bool {
        self.user_created.as_ref().is_none_or(is_falsy)
    }

    /// Renders the request as the JSON object sent over the wire.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let mut body = serde_json::Map::new();
        let fields = [
            ("topic", &self.topic),
            ("data", &self.data),
            ("entity", &self.entity),
            ("entityId", &self.entity_id),
            ("userCreated", &self.user_created),
        ];
        for (name, value) in fields {
            if let Some(present) = value {
                body.insert(name.to_owned(), present.clone());
            }
        }
        Value::Object(body)
    }
}

/// Loose truthiness check for dynamically typed values.
///
/// Objects and arrays are always truthy, as are non-empty strings and
/// non-zero numbers.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number
            .as_f64()
            .is_none_or(|n| n.classify() == FpCategory::Zero),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
