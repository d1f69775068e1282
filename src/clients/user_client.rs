//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes the five store operations with
//! [`UserError`] instead of the framework's envelope.
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
///
/// `get`, `list` and `delete` come from [`ActorClient`]; `create_user` and `update_user`
/// are defined here.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

impl UserClient {
    /// Creates a user; the returned record carries the assigned id.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies the supplied fields of `update` to user `id`.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::MockClient;

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                UserError::ValidationError(vec!["name".into()]),
            )));
        mock.expect_update(9)
            .return_err(FrameworkError::NotFound("9".into()));

        let client = UserClient::new(mock.client());

        let err = client
            .create_user(UserCreate::new("", "a@b.com"))
            .await
            .unwrap_err();
        assert_eq!(err, UserError::ValidationError(vec!["name".into()]));

        let err = client
            .update_user(9, UserUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound("9".into()));

        mock.verify();
    }

    #[tokio::test]
    async fn provided_methods_forward_to_actor() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list()
            .return_ok(vec![User::new(2, "Jane Smith", "jane.smith@example.com")]);
        mock.expect_delete(2).return_err(FrameworkError::ActorClosed);

        let client = UserClient::new(mock.client());

        let users = client.list().await.unwrap();
        assert_eq!(users[0].id, 2);

        let err = client.delete(2).await.unwrap_err();
        assert!(matches!(err, UserError::ActorCommunicationError(_)));

        mock.verify();
    }
}
