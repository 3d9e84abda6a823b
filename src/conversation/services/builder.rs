//! The conversation builder.

use crate::conversation::{
    domain::{ConversationRequest, Session},
    error::ConversationResult,
    ports::{Dispatch, MessageTransport},
    validation::validate_field_types,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Accumulates a conversation and sends it through a transport.
///
/// Setters store values as given and never check types; every check runs in
/// [`send`](Self::send). Setting a field twice keeps the last value. `send`
/// consumes the builder, so a conversation is delivered at most once.
///
/// # Examples
///
/// ```
/// use janis_messaging::conversation::adapters::{
///     MicroserviceCallTransport, RecordingMicroserviceInvoker,
/// };
/// use janis_messaging::conversation::services::Conversation;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// # tokio_test_runtime(async {
/// let invoker = Arc::new(RecordingMicroserviceInvoker::new());
/// let created = Conversation::new(MicroserviceCallTransport::new(invoker))
///     .with_topic("order-created")
///     .with_entity("order")
///     .with_data(json!({ "name": "John" }))
///     .with_client_code("fizzmodarg")
///     .send()
///     .await
///     .expect("conversation should be sent");
///
/// assert_eq!(created.id_str(), Some("conversation-1"));
/// # });
/// # fn tokio_test_runtime(fut: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Runtime::new().expect("runtime").block_on(fut);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Conversation<T>
where
    T: MessageTransport,
{
    transport: T,
    session: Option<Session>,
    request: ConversationRequest,
    client_code: Option<Value>,
}

impl<T> Conversation<T>
where
    T: MessageTransport,
{
    /// Creates an empty conversation with no session attached.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            session: None,
            request: ConversationRequest::new(),
            client_code: None,
        }
    }

    /// Attaches the caller's session.
    ///
    /// The session supplies `userCreated` when none is set and, for
    /// transports that need one, the client code.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Sets the template topic.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<Value>) -> Self {
        self.request.topic = Some(topic.into());
        self
    }

    /// Sets the template data.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.request.data = Some(data.into());
        self
    }

    /// Sets the entity.
    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<Value>) -> Self {
        self.request.entity = Some(entity.into());
        self
    }

    /// Sets the entity id.
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl Into<Value>) -> Self {
        self.request.entity_id = Some(entity_id.into());
        self
    }

    /// Sets the user who created the conversation.
    #[must_use]
    pub fn with_user_created(mut self, user_created: impl Into<Value>) -> Self {
        self.request.user_created = Some(user_created.into());
        self
    }

    /// Sets the tenant client code.
    ///
    /// An empty string counts as unset: transports that require a client
    /// code then fall back to the session's one.
    #[must_use]
    pub fn with_client_code(mut self, client_code: impl Into<Value>) -> Self {
        self.client_code = Some(client_code.into());
        self
    }

    /// Returns the request accumulated so far.
    #[must_use]
    pub const fn request(&self) -> &ConversationRequest {
        &self.request
    }

    /// Returns the explicitly set client code.
    #[must_use]
    pub const fn client_code(&self) -> Option<&Value> {
        self.client_code.as_ref()
    }

    /// Returns the attached session.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Validates the conversation and delivers it with one transport call.
    ///
    /// Before validation, `userCreated` falls back to the session's user id.
    /// After validation, transports that require a client code get the
    /// session's one when none was set explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::InvalidFieldType`] for the first field
    /// with a wrong type, in which case no transport call is made. Transport
    /// failures surface as the transport defines them.
    ///
    /// [`ConversationError::InvalidFieldType`]: crate::conversation::error::ConversationError::InvalidFieldType
    #[instrument(name = "conversation.send", skip_all, fields(transport = self.transport.name()))]
    pub async fn send(self) -> ConversationResult<T::Output> {
        let Self {
            transport,
            session,
            mut request,
            client_code,
        } = self;

        if let Some(user_id) = session.as_ref().and_then(Session::user_id)
            && request.lacks_user_created()
        {
            request.user_created = Some(Value::String(user_id.to_owned()));
        }

        if let Err(err) = validate_field_types(&request, client_code.as_ref()) {
            warn!(error = %err, "conversation rejected before dispatch");
            return Err(err);
        }

        let resolved_client_code = resolve_client_code(
            client_code,
            session.as_ref(),
            transport.requires_client_code(),
        );

        debug!(
            topic = ?request.topic,
            has_client_code = resolved_client_code.is_some(),
            has_session = session.is_some(),
            "dispatching conversation"
        );

        transport
            .deliver(Dispatch {
                client_code: resolved_client_code,
                payload: request,
                session,
            })
            .await
    }
}

impl Session {
    /// Creates a conversation bound to this session.
    #[must_use]
    pub fn conversation<T>(&self, transport: T) -> Conversation<T>
    where
        T: MessageTransport,
    {
        Conversation::new(transport).with_session(self.clone())
    }
}

/// Picks the client code handed to the transport.
///
/// An explicit non-empty code always wins. Otherwise the session's code is
/// used, but only for transports that require one.
fn resolve_client_code(
    explicit: Option<Value>,
    session: Option<&Session>,
    required: bool,
) -> Option<String> {
    let explicit_code = match explicit {
        Some(Value::String(code)) if !code.is_empty() => Some(code),
        _ => None,
    };

    explicit_code.or_else(|| {
        required
            .then(|| session.and_then(Session::client_code))
            .flatten()
            .map(str::to_owned)
    })
}
