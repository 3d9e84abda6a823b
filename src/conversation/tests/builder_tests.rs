//! Unit tests for the builder's dispatch contract.

use super::fixtures::{
    CREATED_ID, MockFunction, MockMicroservice, SESSION_CLIENT_CODE, SESSION_USER_ID,
    capturing_function_invoker, capturing_microservice_invoker, created_response, session, take,
};
use crate::conversation::{
    adapters::{
        CLIENT_HEADER, CreatedConversation, FunctionInvocationTransport, MicroserviceCallTransport,
    },
    domain::{ConversationField, Session},
    error::{ConversationError, ConversationErrorCode},
    services::Conversation,
};
use rstest::rstest;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

fn silent_microservice() -> MicroserviceCallTransport<MockMicroservice> {
    let mut invoker = MockMicroservice::new();
    invoker.expect_call().never();
    MicroserviceCallTransport::new(Arc::new(invoker))
}

fn silent_function() -> FunctionInvocationTransport<MockFunction> {
    let mut invoker = MockFunction::new();
    invoker.expect_invoke().never();
    FunctionInvocationTransport::new(Arc::new(invoker))
}

#[rstest]
#[tokio::test]
async fn invalid_topic_fails_before_any_call() {
    let err = Conversation::new(silent_microservice())
        .with_topic(json!({ "wrongField": "string" }))
        .with_client_code("clientCode")
        .send()
        .await
        .expect_err("invalid topic should fail");

    assert_eq!(err, ConversationError::InvalidFieldType(ConversationField::Topic));
    assert_eq!(err.name(), "ConversationError");
    assert_eq!(
        err.to_string(),
        "Invalid conversation: topic property must be a string"
    );
}

#[rstest]
#[tokio::test]
async fn invalid_user_created_fails_on_function_transport_too() {
    let err = Conversation::new(silent_function())
        .with_topic("example-topic")
        .with_user_created(json!({ "userCreated": "wrongType" }))
        .send()
        .await
        .expect_err("invalid userCreated should fail");

    assert_eq!(err.code(), ConversationErrorCode::InvalidFieldType);
    assert_eq!(
        err.to_string(),
        "Invalid conversation: userCreated property must be a string"
    );
}

#[rstest]
#[tokio::test]
async fn empty_conversation_sends_empty_payload() {
    let (invoker, captured) = capturing_microservice_invoker(created_response());

    let created = Conversation::new(MicroserviceCallTransport::new(Arc::new(invoker)))
        .send()
        .await
        .expect("empty conversation should be sent");

    assert_eq!(created.id_str(), Some(CREATED_ID));
    let request = take(&captured);
    assert_eq!(request.payload, json!({}));
    assert!(request.headers.is_empty());
    assert!(request.session.is_none());
}

#[rstest]
#[tokio::test]
async fn session_user_becomes_user_created(session: Session) {
    let (invoker, captured) = capturing_microservice_invoker(created_response());

    let created = session
        .conversation(MicroserviceCallTransport::new(Arc::new(invoker)))
        .with_topic("example-topic")
        .send()
        .await
        .expect("conversation should be sent");

    assert_eq!(
        created,
        CreatedConversation {
            id: Some(json!(CREATED_ID))
        }
    );
    let request = take(&captured);
    assert_eq!(request.service, "conversation");
    assert_eq!(request.namespace, "message");
    assert_eq!(request.method, "create");
    assert_eq!(
        request.payload,
        json!({ "topic": "example-topic", "userCreated": SESSION_USER_ID })
    );
    assert!(request.headers.is_empty(), "session client code is not a header");
    assert_eq!(request.session, Some(session));
}

#[rstest]
#[tokio::test]
async fn explicit_user_created_is_not_overridden(session: Session) {
    let (invoker, captured) = capturing_microservice_invoker(created_response());

    session
        .conversation(MicroserviceCallTransport::new(Arc::new(invoker)))
        .with_topic("example-topic")
        .with_user_created("5d1fc1eeb5b68406e0487a07")
        .send()
        .await
        .expect("conversation should be sent");

    assert_eq!(
        take(&captured).payload,
        json!({ "topic": "example-topic", "userCreated": "5d1fc1eeb5b68406e0487a07" })
    );
}

#[rstest]
#[case::null(serde_json::Value::Null)]
#[case::empty(json!(""))]
#[tokio::test]
async fn falsy_user_created_falls_back_to_session(
    session: Session,
    #[case] user_created: serde_json::Value,
) {
    let (invoker, captured) = capturing_microservice_invoker(created_response());

    session
        .conversation(MicroserviceCallTransport::new(Arc::new(invoker)))
        .with_user_created(user_created)
        .send()
        .await
        .expect("conversation should be sent");

    assert_eq!(
        take(&captured).payload,
        json!({ "userCreated": SESSION_USER_ID })
    );
}

#[rstest]
#[tokio::test]
async fn explicit_client_code_becomes_header() {
    let (invoker, captured) = capturing_microservice_invoker(created_response());

    Conversation::new(MicroserviceCallTransport::new(Arc::new(invoker)))
        .with_topic("example-topic")
        .with_client_code("client-code")
        .send()
        .await
        .expect("conversation should be sent");

    let request = take(&captured);
    assert_eq!(request.payload, json!({ "topic": "example-topic" }));
    assert_eq!(
        request.headers,
        BTreeMap::from([(CLIENT_HEADER.to_owned(), "client-code".to_owned())])
    );
}

#[rstest]
#[tokio::test]
async fn all_fields_reach_the_payload_unchanged(session: Session) {
    let (invoker, captured) = capturing_microservice_invoker(created_response());

    session
        .conversation(MicroserviceCallTransport::new(Arc::new(invoker)))
        .with_topic("example-topic")
        .with_entity("order")
        .with_entity_id("6283d35eef38a7319756256a")
        .with_client_code("client-code")
        .with_data(json!({ "name": "John", "surname": "Doe" }))
        .send()
        .await
        .expect("conversation should be sent");

    let request = take(&captured);
    assert_eq!(
        request.payload,
        json!({
            "topic": "example-topic",
            "entity": "order",
            "entityId": "6283d35eef38a7319756256a",
            "data": { "name": "John", "surname": "Doe" },
            "userCreated": SESSION_USER_ID,
        })
    );
    assert_eq!(
        request.headers.get(CLIENT_HEADER).map(String::as_str),
        Some("client-code")
    );
}

#[rstest]
#[tokio::test]
async fn setting_a_field_twice_keeps_the_last_value() {
    let (invoker, captured) = capturing_microservice_invoker(created_response());

    Conversation::new(MicroserviceCallTransport::new(Arc::new(invoker)))
        .with_topic("first")
        .with_topic("second")
        .with_data(json!({ "a": 1 }))
        .with_data(json!({ "b": 2 }))
        .with_client_code("first-client")
        .with_client_code("second-client")
        .send()
        .await
        .expect("conversation should be sent");

    let request = take(&captured);
    assert_eq!(request.payload, json!({ "topic": "second", "data": { "b": 2 } }));
    assert_eq!(
        request.headers.get(CLIENT_HEADER).map(String::as_str),
        Some("second-client")
    );
}

#[rstest]
#[tokio::test]
async fn function_transport_defaults_client_code_from_session(session: Session) {
    let (invoker, captured) = capturing_function_invoker(json!({ "statusCode": 200 }));

    let outcome = session
        .conversation(FunctionInvocationTransport::new(Arc::new(invoker)))
        .with_topic("example-topic")
        .send()
        .await
        .expect("conversation should be sent");

    assert_eq!(
        outcome.expect("invocation should succeed"),
        json!({ "statusCode": 200 })
    );
    let invocation = take(&captured);
    assert_eq!(invocation.client_code.as_deref(), Some(SESSION_CLIENT_CODE));
    assert_eq!(
        invocation.payload,
        json!({ "topic": "example-topic", "userCreated": SESSION_USER_ID })
    );
}

#[rstest]
#[tokio::test]
async fn explicit_client_code_beats_session_code(session: Session) {
    let (invoker, captured) = capturing_function_invoker(json!({ "statusCode": 200 }));

    session
        .conversation(FunctionInvocationTransport::new(Arc::new(invoker)))
        .with_client_code("explicit-client")
        .send()
        .await
        .expect("conversation should be sent");

    let invocation = take(&captured);
    assert_eq!(invocation.client_code.as_deref(), Some("explicit-client"));
    assert_eq!(invocation.payload, json!({ "userCreated": SESSION_USER_ID }));
}

#[rstest]
#[tokio::test]
async fn empty_explicit_client_code_falls_back_to_session_code(session: Session) {
    let (invoker, captured) = capturing_function_invoker(json!({ "statusCode": 200 }));

    session
        .conversation(FunctionInvocationTransport::new(Arc::new(invoker)))
        .with_client_code("")
        .send()
        .await
        .expect("conversation should be sent");

    assert_eq!(
        take(&captured).client_code.as_deref(),
        Some(SESSION_CLIENT_CODE)
    );
}

#[rstest]
#[tokio::test]
async fn function_transport_without_any_client_code_passes_none() {
    let (invoker, captured) = capturing_function_invoker(json!({ "statusCode": 200 }));

    Conversation::new(FunctionInvocationTransport::new(Arc::new(invoker)))
        .with_topic("example-topic")
        .send()
        .await
        .expect("conversation should be sent");

    assert_eq!(take(&captured).client_code, None);
}

#[rstest]
fn builder_exposes_accumulated_state(session: Session) {
    let conversation = Conversation::new(silent_microservice())
        .with_session(session.clone())
        .with_entity(12)
        .with_client_code("client-code");

    assert_eq!(conversation.request().entity, Some(json!(12)));
    assert_eq!(conversation.client_code(), Some(&json!("client-code")));
    assert_eq!(conversation.session(), Some(&session));
    assert!(conversation.request().topic.is_none());
}
