use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
pub type UserId = u64;

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new user.
///
/// Absent JSON fields deserialize as empty strings so that they are reported by
/// validation rather than by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Payload for updating an existing user. Only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Creates a User with an explicit id, used for seeding a store.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// The two records a fresh demo deployment starts with.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john.doe@example.com"),
        User::new(2, "Jane Smith", "jane.smith@example.com"),
    ]
}
