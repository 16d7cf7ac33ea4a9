//! Error types for resolution and rendering.
//!
//! An invalid or missing field always fails loudly; describing a door that
//! cannot exist is worse than stopping generation.

use thiserror::Error;

use crate::door::DoorType;

/// Structural configuration errors.
///
/// Raised when a required field is absent or a value breaks an invariant.
/// There is no recovery inside the engine; callers decide whether to abort
/// or substitute their own defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration field is unset
    #[error("{field} is required in {context}")]
    MissingField {
        field: &'static str,
        context: &'static str,
    },

    /// A field is present but unusable in this context
    #[error("invalid {field} in {context}")]
    InvalidField {
        field: &'static str,
        context: &'static str,
    },

    /// A door is locked but its type cannot carry a lock
    #[error("invalid locked setting for non-lockable door type \"{door_type}\"")]
    NonLockableLocked { door_type: DoorType },

    /// A door list was rendered for a room none of its legs reference
    #[error("no door connection for room number {room_number}")]
    NoRoomConnection { room_number: u32 },
}

/// A textual value outside its declared domain.
///
/// Produced at the parsing edge; inside the typed core an out-of-domain
/// variant is unrepresentable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {domain} value \"{value}\"")]
pub struct DomainViolation {
    pub domain: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ConfigError::MissingField {
            field: "room_count",
            context: "generate_rooms",
        };
        assert_eq!(err.to_string(), "room_count is required in generate_rooms");
    }

    #[test]
    fn test_non_lockable_message_names_the_type() {
        let err = ConfigError::NonLockableLocked {
            door_type: DoorType::Archway,
        };
        assert!(err.to_string().contains("archway"));
        assert!(err.to_string().contains("non-lockable"));
    }

    #[test]
    fn test_domain_violation_message() {
        let err = DomainViolation {
            domain: "item_quantity",
            value: "bazillion".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown item_quantity value \"bazillion\""
        );
    }
}
