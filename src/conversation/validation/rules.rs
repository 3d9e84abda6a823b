//! Field type rules for conversation requests.
//!
//! Each rule is a pure function over a single optional value. An absent value
//! always passes: these rules check types, never presence.

use crate::conversation::{
    domain::{ConversationField, ConversationRequest},
    error::{ConversationError, ConversationResult},
};
use serde_json::Value;

/// Validates the types of every field of a request plus its client code.
///
/// Fields are checked in [`ConversationField::VALIDATION_ORDER`] and the
/// first violation is returned; later fields are not inspected.
///
/// # Errors
///
/// Returns [`ConversationError::InvalidFieldType`] naming the first field
/// whose value has the wrong type.
///
/// # Examples
///
/// ```
/// use janis_messaging::conversation::domain::{ConversationField, ConversationRequest};
/// use janis_messaging::conversation::error::ConversationError;
/// use janis_messaging::conversation::validation::rules::validate_field_types;
/// use serde_json::json;
///
/// let request = ConversationRequest {
///     topic: Some(json!("order-created")),
///     entity: Some(json!(["not", "scalar"])),
///     ..ConversationRequest::new()
/// };
///
/// assert_eq!(
///     validate_field_types(&request, None),
///     Err(ConversationError::InvalidFieldType(ConversationField::Entity)),
/// );
/// ```
pub fn validate_field_types(
    request: &ConversationRequest,
    client_code: Option<&Value>,
) -> ConversationResult<()> {
    for field in ConversationField::VALIDATION_ORDER {
        let value = match field {
            ConversationField::Topic => request.topic.as_ref(),
            ConversationField::Data => request.data.as_ref(),
            ConversationField::Entity => request.entity.as_ref(),
            ConversationField::EntityId => request.entity_id.as_ref(),
            ConversationField::ClientCode => client_code,
            ConversationField::UserCreated => request.user_created.as_ref(),
        };
        validate_field(field, value)?;
    }
    Ok(())
}

/// Validates a single field value against the rule for that field.
///
/// # Errors
///
/// Returns [`ConversationError::InvalidFieldType`] when `value` is present and
/// of the wrong type.
pub fn validate_field(field: ConversationField, value: Option<&Value>) -> ConversationResult<()> {
    let Some(present) = value else {
        return Ok(());
    };

    let accepted = match field {
        ConversationField::Topic | ConversationField::ClientCode | ConversationField::UserCreated => {
            is_string(present)
        }
        ConversationField::Data => is_object_like(present),
        ConversationField::Entity | ConversationField::EntityId => is_string_or_number(present),
    };

    if accepted {
        Ok(())
    } else {
        Err(ConversationError::InvalidFieldType(field))
    }
}

/// Returns `true` for string values.
#[must_use]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns `true` for string and numeric values.
#[must_use]
pub const fn is_string_or_number(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}

/// Returns `true` for values a JavaScript `typeof` check reports as
/// `"object"`.
///
/// Arrays and `null` are accepted alongside maps. Existing producers rely on
/// this, so it stays loose.
#[must_use]
pub const fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_) | Value::Null)
}
