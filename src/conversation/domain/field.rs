//! Names of the fields a conversation request carries.

use std::fmt;

/// A field of a conversation request, including the out-of-band client code.
///
/// The discriminant order matches the order in which field types are
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationField {
    /// Template selector.
    Topic,
    /// Template substitution payload.
    Data,
    /// Domain entity the conversation concerns.
    Entity,
    /// Identifier of the entity.
    EntityId,
    /// Tenant identifier, never part of the payload body.
    ClientCode,
    /// User who triggered the conversation.
    UserCreated,
}

impl ConversationField {
    /// Fields in the order the validator inspects them.
    pub const VALIDATION_ORDER: [Self; 6] = [
        Self::Topic,
        Self::Data,
        Self::Entity,
        Self::EntityId,
        Self::ClientCode,
        Self::UserCreated,
    ];

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Data => "data",
            Self::Entity => "entity",
            Self::EntityId => "entityId",
            Self::ClientCode => "clientCode",
            Self::UserCreated => "userCreated",
        }
    }

    /// Returns the human-readable type requirement used in error messages.
    ///
    /// The "an string" wording is what remote consumers match on and is kept
    /// as is.
    #[must_use]
    pub const fn expected_type(self) -> &'static str {
        match self {
            Self::Topic | Self::ClientCode | Self::UserCreated => "a string",
            Self::Data => "an object",
            Self::Entity | Self::EntityId => "an string or number",
        }
    }
}

impl fmt::Display for ConversationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
