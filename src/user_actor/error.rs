//! Error types for the User actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// One or more required fields were missing or empty. Carries the field names.
    #[error("User validation error: missing or empty field(s): {}", .0.join(", "))]
    ValidationError(Vec<String>),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    /// Recovers the typed error from the framework envelope.
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(user_error) => *user_error,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_fields() {
        let err = UserError::ValidationError(vec!["name".into(), "email".into()]);
        assert_eq!(
            err.to_string(),
            "User validation error: missing or empty field(s): name, email"
        );
    }

    #[test]
    fn framework_errors_map_to_user_errors() {
        assert_eq!(
            UserError::from(FrameworkError::NotFound("3".into())),
            UserError::NotFound("3".into())
        );

        let boxed = FrameworkError::EntityError(Box::new(UserError::ValidationError(vec![
            "email".into(),
        ])));
        assert_eq!(
            UserError::from(boxed),
            UserError::ValidationError(vec!["email".into()])
        );

        assert!(matches!(
            UserError::from(FrameworkError::ActorClosed),
            UserError::ActorCommunicationError(_)
        ));
    }
}
