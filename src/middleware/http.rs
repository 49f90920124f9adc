//! Transport-level layers wrapped around the whole fixture router.
//!
//! Values come from [`HttpLimits`] so a test harness can tighten them through the
//! environment. Order, outermost first: error mapping, request id, body limit,
//! timeout, access log. A request rejected by the body limit or cut off by the
//! timeout still gets an `x-request-id` (or the configured header) back.

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::HttpLimits;

pub fn apply(router: Router, limits: &HttpLimits) -> Router {
    let layers = ServiceBuilder::new()
        // The timeout is the only fallible layer; everything else is a response.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<Elapsed>() {
                tracing::warn!("request timed out");
                StatusCode::REQUEST_TIMEOUT
            } else {
                tracing::error!(error = %err, "unhandled middleware error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        .layer(SetRequestIdLayer::new(
            limits.request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(
            limits.request_id_header.clone(),
        ))
        .layer(RequestBodyLimitLayer::new(limits.body_limit_bytes))
        .layer(TimeoutLayer::new(limits.request_timeout))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}
