//! # System Lifecycle & Orchestration
//!
//! Starting, seeding and shutting down the actor that backs the registry.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - [`UserSystem::shutdown`] waits for the actor task
//!
//! No queued request is lost: the actor only stops after answering everything already sent.

pub mod tracing;
pub mod user_system;

pub use tracing::*;
pub use user_system::*;
