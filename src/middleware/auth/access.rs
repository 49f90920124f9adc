//! Hub API token guard.
//!
//! The `Authorization` header must equal the configured token byte for byte
//! (`token test` by default). There is no scheme parsing and no Basic decoding:
//! clients under test send exactly this value, and anything else is rejected with
//! the hub's 403 + `WWW-Authenticate: Basic` response.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Put every route of `router` behind the token guard.
///
/// `route_layer` is used so unknown paths still fall through to the default 404.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|v| v.as_bytes() == state.api_token().as_bytes());

    if !authorized {
        tracing::warn!(
            method = %req.method(),
            uri = %req.uri(),
            has_header = req.headers().contains_key(header::AUTHORIZATION),
            "rejected request with bad credential"
        );
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
