/*
 * Responsibility
 * - GET /proxy (registered routes, keyed by routespec)
 */
use axum::Json;

use crate::{api::hub::dto::proxy::ProxyTable, services::fixture};

pub async fn get_proxy_table() -> Json<ProxyTable> {
    Json(fixture::proxy_table())
}
