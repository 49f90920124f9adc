/*
 * Responsibility
 * - URL layout of the hub API (/users/{user_name}, /proxy)
 * - Every route here sits behind the token guard
 */
use axum::{Router, routing::get};

use crate::api::hub::handlers::{proxy::get_proxy_table, users::get_user};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/users/{user_name}", get(get_user))
        .route("/proxy", get(get_proxy_table));

    middleware::auth::access::apply(router, state)
}
