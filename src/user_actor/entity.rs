//! ActorEntity trait implementation for the User domain type.
//!
//! Validation lives here: both fields are required on create, and an update may omit a
//! field but may not blank it.

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> UserId {
        self.id
    }

    /// Creates a new User from creation parameters.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        require_non_empty(&[
            ("name", Some(params.name.as_str())),
            ("email", Some(params.email.as_str())),
        ])?;
        Ok(Self::new(id, params.name, params.email))
    }

    /// Applies a partial update.
    ///
    /// # Fields Updated
    /// - `name`: User's display name, if supplied
    /// - `email`: User's email address, if supplied
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        require_non_empty(&[
            ("name", update.name.as_deref()),
            ("email", update.email.as_deref()),
        ])?;
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}

/// Fails with every supplied field whose value is empty or whitespace only.
/// `None` means "not supplied" and is skipped.
fn require_non_empty(fields: &[(&str, Option<&str>)]) -> Result<(), UserError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| matches!(value, Some(v) if v.trim().is_empty()))
        .map(|(field, _)| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(UserError::ValidationError(missing))
    }
}
