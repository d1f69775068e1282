//! HTTP transport for the registry: maps `/api/users` requests onto [`UserClient`] calls.
//!
//! ## Routes
//!
//! - `GET /api/users`: every user, in creation order (200).
//! - `GET /api/users/:id`: one user (200), or 404.
//! - `POST /api/users`: create from `{"name", "email"}` (201), or 400 naming missing fields.
//! - `PUT /api/users/:id`: apply the supplied fields (200), 400 or 404.
//! - `DELETE /api/users/:id`: remove (204, empty body), or 404.
//! - `GET /health`: `{ "ok": true }`.
//!
//! Errors are returned as `{ "error": "<message>" }`; validation errors also carry
//! `"fields": [...]`. A non-numeric `:id` is rejected by the path extractor with 400 before
//! the store is involved.

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::future::Future;
use tracing::{info, info_span, Instrument};

use crate::clients::{ActorClient, UserClient};
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;

/// Build an axum `Router` serving the user routes against `client`.
pub fn router(client: UserClient) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(middleware::from_fn(trace_request))
        .with_state(client)
}

/// Serve the routes on `listener` until `shutdown` resolves.
pub async fn serve(
    client: UserClient,
    listener: tokio::net::TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown)
        .await
}

impl UserError {
    /// HTTP status a caller should see for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::ValidationError(_) => StatusCode::BAD_REQUEST,
            UserError::ActorCommunicationError(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            UserError::ValidationError(fields) => {
                json!({ "error": self.to_string(), "fields": fields })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

async fn trace_request(request: Request, next: Next) -> Response {
    let span = info_span!(
        "http",
        method = %request.method(),
        path = %request.uri().path()
    );
    async move {
        let response = next.run(request).await;
        info!(status = response.status().as_u16(), "Request handled");
        response
    }
    .instrument(span)
    .await
}

/// `GET /health`
async fn health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// `GET /api/users`
async fn list_users(State(client): State<UserClient>) -> Result<Json<Vec<User>>, UserError> {
    Ok(Json(client.list().await?))
}

/// `GET /api/users/:id`
async fn get_user(
    State(client): State<UserClient>,
    Path(id): Path<UserId>,
) -> Result<Json<User>, UserError> {
    Ok(Json(client.get(id).await?))
}

/// `POST /api/users`
async fn create_user(
    State(client): State<UserClient>,
    Json(params): Json<UserCreate>,
) -> Result<(StatusCode, Json<User>), UserError> {
    let user = client.create_user(params).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /api/users/:id`
async fn update_user(
    State(client): State<UserClient>,
    Path(id): Path<UserId>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<User>, UserError> {
    Ok(Json(client.update_user(id, update).await?))
}

/// `DELETE /api/users/:id`
async fn delete_user(
    State(client): State<UserClient>,
    Path(id): Path<UserId>,
) -> Result<StatusCode, UserError> {
    client.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
