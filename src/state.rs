/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Read-only after startup; Clone is cheap (Arc inside)
 */
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    api_token: Arc<str>,
}

impl AppState {
    pub fn new(api_token: impl Into<Arc<str>>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }

    /// Exact `Authorization` header value the hub API accepts.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}
