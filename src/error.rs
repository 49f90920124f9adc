/*
 * Responsibility
 * - AppError shared by the hub API
 * - IntoResponse impl: fixed status / plain-text body / headers per variant
 */
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const UNAUTHORIZED_BODY: &str =
    "Could not verify your access level for that URL.\nYou have to login with proper credentials";
pub const NOT_FOUND_BODY: &str = "Client Not Found.\n";
pub const LOGIN_REALM: &str = r#"Basic realm="Login Required""#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    // Missing or mismatched Authorization header. The hub answers 403, not 401.
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found: {name}")]
    NotFound { name: String },
}

impl AppError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::FORBIDDEN,
                [(header::WWW_AUTHENTICATE, LOGIN_REALM)],
                UNAUTHORIZED_BODY,
            )
                .into_response(),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
        }
    }
}
