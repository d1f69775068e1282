//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with seed size), shutdown and final size
//! - **Store Operations**: `Create`, `List`, `Get`, `Update`, `Delete` with `entity_type` and `id` fields
//! - **Client Calls**: one span per `UserClient` method via `#[instrument]`
//! - **HTTP**: one span per request, with method and path, closed by the response status
//!
//! The actor runs in its own task, so its events are not nested under the request span.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show request payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, creating a user then deleting one prints:
//!
//! ```text
//! INFO Actor started entity_type="User" size=2
//! INFO http{method=POST path=/api/users}: Request handled status=201
//! INFO Created entity_type="User" id=3 size=3
//! INFO http{method=DELETE path=/api/users/1}: Request handled status=204
//! INFO Deleted entity_type="User" id=1 size=2
//! ```

/// Initializes structured logging, filtered by `RUST_LOG`.
///
/// Uses a compact format without module paths; `entity_type` fields identify the actor.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
