//! # User Registry
//!
//! An in-memory, concurrency-safe registry of user records served over a small REST API.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`resource_actor`])
//! A generic `ResourceActor<T>` owns the records and the id counter in a single task and
//! processes every request in order. Ids are monotonic and never reused, listing follows
//! insertion order, and a failed operation leaves no trace.
//!
//! ### 2. The Domain ([`model`], [`user_actor`])
//! [`User`](model::User) and its DTOs, the validation rules, and [`UserError`](user_actor::UserError).
//!
//! ### 3. The Interface ([`clients`])
//! [`UserClient`](clients::UserClient) wraps the generic client with typed operations and errors.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`UserSystem`](lifecycle::UserSystem) starts, seeds and stops the actor;
//! [`Config`](config::Config) decides how.
//!
//! ### 5. The Transport ([`http`])
//! axum routes under `/api/users` that translate results and errors into status codes.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -s localhost:3000/api/users
//! ```

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
