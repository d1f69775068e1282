//! # Resource Actor
//!
//! Building blocks for managing a collection of uniquely-identified records behind a single
//! owning task. A `ResourceActor<T>` owns the records and the id counter; every create,
//! list, get, update and delete is a message processed in order, so concurrent callers
//! never observe a half-applied change and never race on id allocation.
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain record, its DTOs and its validation
//! 2. **Runtime Layer** ([`ResourceActor`]) - Ordered storage, id allocation, message loop
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Quick Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Book {
//!     id: u64,
//!     title: String,
//! }
//!
//! #[derive(Debug)] struct BookCreate { title: String }
//! #[derive(Debug)] struct BookUpdate { title: Option<String> }
//! #[derive(Debug, thiserror::Error)]
//! #[error("title must not be empty")]
//! struct EmptyTitle;
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u64;
//!     type Create = BookCreate;
//!     type Update = BookUpdate;
//!     type Context = ();
//!     type Error = EmptyTitle;
//!
//!     fn id(&self) -> u64 { self.id }
//!
//!     fn from_create_params(id: u64, params: BookCreate) -> Result<Self, Self::Error> {
//!         if params.title.is_empty() { return Err(EmptyTitle); }
//!         Ok(Self { id, title: params.title })
//!     }
//!
//!     async fn on_update(&mut self, update: BookUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(title) = update.title { self.title = title; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Book>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let book = client.create(BookCreate { title: "Dune".into() }).await.unwrap();
//!     assert_eq!(book.id, 1);
//!
//!     // A rejected create does not consume an id
//!     assert!(client.create(BookCreate { title: String::new() }).await.is_err());
//!     let next = client.create(BookCreate { title: "Emma".into() }).await.unwrap();
//!     assert_eq!(next.id, 2);
//!
//!     client.delete(1).await.unwrap();
//!     assert!(matches!(client.get(1).await, Err(FrameworkError::NotFound(_))));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks)
//! - Clients are cheap clones of an mpsc sender and can be shared across tasks
//! - Dropping every client closes the channel and ends the actor's loop
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations, so code
//! built on top of a client can be tested without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
