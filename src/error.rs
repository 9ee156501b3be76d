use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            GatewayError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Failures surfaced by the admin API client. `MissingSession` and
/// `SessionExpired` are resolved by routing back to the login screen; the
/// rest are shown to the operator where they happened.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no active session")]
    MissingSession,

    #[error("session expired")]
    SessionExpired,

    #[error("wrong password")]
    InvalidCredentials,

    #[error("api error {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::MissingSession | ClientError::SessionExpired)
    }
}
