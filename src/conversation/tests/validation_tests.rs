//! Unit tests for field type validation.

use crate::conversation::{
    domain::{ConversationField, ConversationRequest},
    error::{ConversationError, ConversationErrorCode},
    validation::rules::{validate_field, validate_field_types},
};
use rstest::rstest;
use serde_json::{Value, json};

fn request_with(field: ConversationField, value: Value) -> (ConversationRequest, Option<Value>) {
    let mut request = ConversationRequest::new();
    let mut client_code = None;
    match field {
        ConversationField::Topic => request.topic = Some(value),
        ConversationField::Data => request.data = Some(value),
        ConversationField::Entity => request.entity = Some(value),
        ConversationField::EntityId => request.entity_id = Some(value),
        ConversationField::ClientCode => client_code = Some(value),
        ConversationField::UserCreated => request.user_created = Some(value),
    }
    (request, client_code)
}

#[rstest]
#[case::topic(
    ConversationField::Topic,
    json!({ "wrongField": "string" }),
    "Invalid conversation: topic property must be a string"
)]
#[case::data(
    ConversationField::Data,
    json!("WrongData"),
    "Invalid conversation: data property must be an object"
)]
#[case::entity(
    ConversationField::Entity,
    json!({ "entity": "wrongType" }),
    "Invalid conversation: entity property must be an string or number"
)]
#[case::entity_id(
    ConversationField::EntityId,
    json!({ "entityId": "wrongType" }),
    "Invalid conversation: entityId property must be an string or number"
)]
#[case::client_code(
    ConversationField::ClientCode,
    json!({ "clientCode": "wrongType" }),
    "Invalid conversation: clientCode property must be a string"
)]
#[case::user_created(
    ConversationField::UserCreated,
    json!({ "userCreated": "wrongType" }),
    "Invalid conversation: userCreated property must be a string"
)]
fn wrong_type_is_rejected_with_fixed_message(
    #[case] field: ConversationField,
    #[case] value: Value,
    #[case] message: &str,
) {
    let (request, client_code) = request_with(field, value);

    let err = validate_field_types(&request, client_code.as_ref())
        .expect_err("wrong type should be rejected");

    assert_eq!(err, ConversationError::InvalidFieldType(field));
    assert_eq!(err.code(), ConversationErrorCode::InvalidFieldType);
    assert_eq!(err.to_string(), message);
}

#[rstest]
#[case::topic(ConversationField::Topic, json!("example-topic"))]
#[case::data_object(ConversationField::Data, json!({ "name": "John" }))]
#[case::data_array(ConversationField::Data, json!(["John", "Doe"]))]
#[case::data_null(ConversationField::Data, Value::Null)]
#[case::entity_string(ConversationField::Entity, json!("order"))]
#[case::entity_number(ConversationField::Entity, json!(7))]
#[case::entity_id_string(ConversationField::EntityId, json!("6283d35eef38a7319756256a"))]
#[case::entity_id_float(ConversationField::EntityId, json!(1.5))]
#[case::client_code(ConversationField::ClientCode, json!("client-code"))]
#[case::user_created(ConversationField::UserCreated, json!("5d1fc1eeb5b68406e0487a07"))]
fn well_typed_value_passes(#[case] field: ConversationField, #[case] value: Value) {
    let (request, client_code) = request_with(field, value);
    assert_eq!(validate_field_types(&request, client_code.as_ref()), Ok(()));
}

#[rstest]
#[case::topic_null(ConversationField::Topic, Value::Null)]
#[case::topic_number(ConversationField::Topic, json!(12))]
#[case::data_bool(ConversationField::Data, json!(true))]
#[case::data_number(ConversationField::Data, json!(3))]
#[case::entity_bool(ConversationField::Entity, json!(false))]
#[case::entity_null(ConversationField::Entity, Value::Null)]
#[case::entity_id_array(ConversationField::EntityId, json!([1]))]
#[case::client_code_number(ConversationField::ClientCode, json!(10))]
#[case::user_created_number(ConversationField::UserCreated, json!(10))]
fn other_wrong_types_are_rejected(#[case] field: ConversationField, #[case] value: Value) {
    assert_eq!(
        validate_field(field, Some(&value)),
        Err(ConversationError::InvalidFieldType(field))
    );
}

#[rstest]
fn empty_request_passes() {
    assert_eq!(validate_field_types(&ConversationRequest::new(), None), Ok(()));
}

#[rstest]
fn absent_field_always_passes() {
    for field in ConversationField::VALIDATION_ORDER {
        assert_eq!(validate_field(field, None), Ok(()));
    }
}

#[rstest]
fn first_violation_in_order_wins() {
    let request = ConversationRequest {
        topic: Some(json!("example-topic")),
        data: Some(json!("not an object")),
        entity: Some(json!({ "wrong": true })),
        entity_id: None,
        user_created: Some(json!(1)),
    };

    assert_eq!(
        validate_field_types(&request, Some(&json!(false))),
        Err(ConversationError::InvalidFieldType(ConversationField::Data))
    );
}

#[rstest]
fn client_code_is_checked_before_user_created() {
    let request = ConversationRequest {
        user_created: Some(json!({ "id": 1 })),
        ..ConversationRequest::new()
    };

    assert_eq!(
        validate_field_types(&request, Some(&json!(["code"]))),
        Err(ConversationError::InvalidFieldType(ConversationField::ClientCode))
    );
}
