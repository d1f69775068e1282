//! # User Actor
//!
//! The User resource actor: a [`ResourceActor`] managing [`User`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] / [`with_seed()`] - Factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use user_registry::user_actor;
//! use user_registry::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!
//!     // No dependencies, so context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let user = client
//!         .create_user(UserCreate::new("Alice", "alice@example.com"))
//!         .await?;
//!     assert_eq!(user.id, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::{FrameworkError, ResourceActor};

/// Creates an empty User actor and its client.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn new(capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, UserClient::new(generic_client))
}

/// Creates a User actor pre-populated with `seed`; new ids continue past the highest seed id.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn with_seed(
    capacity: usize,
    seed: Vec<User>,
) -> Result<(ResourceActor<User>, UserClient), FrameworkError> {
    let (actor, generic_client) = ResourceActor::with_seed(capacity, seed)?;
    Ok((actor, UserClient::new(generic_client)))
}
