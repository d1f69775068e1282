//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource type implements to be managed by
//! the generic `ResourceActor`. It fixes the associated types for ids, DTOs, context and
//! errors, and provides the lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Architecture Note
//! The actor owns the collection and the id counter; the entity owns its own validation.
//! `from_create_params` builds (and rejects) a record, `on_update` applies a patch. Neither
//! hook can reach the collection, so every mutation still flows through the actor's
//! sequential loop.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default implementations do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Identifiers
/// Ids are integers under the hood: the actor allocates them from a monotonic `u64`
/// counter (`From<u64>`) and, when seeded, reads existing ids back (`Into<u64>`) to start
/// the counter one past the highest.
///
/// # Async & Context
/// The hooks are `#[async_trait]` and receive the `Context` passed to `run()`, so
/// dependencies can be bound late.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Copy + Eq + Hash + Send + Sync + Display + Debug + From<u64> + Into<u64>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per operation; clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this entity was created with.
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    ///
    /// Returning an error rejects the create; the id is not consumed.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update.
    ///
    /// The actor calls this on a working copy and only commits the copy when it returns
    /// `Ok`, so an implementation may bail out halfway without leaving a torn record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
