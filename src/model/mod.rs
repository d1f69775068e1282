//! Pure data structures (DTOs) implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.

pub mod user;

pub use user::*;
