/*
 * Responsibility
 * - Load config → build state → assemble Router
 * - Apply middleware (token guard on the hub API, HTTP layers globally)
 * - Start with axum::serve() and stop on Ctrl+C
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::{Config, HttpLimits},
    middleware,
    state::AppState,
};

pub const HUB_API_PREFIX: &str = "/hub/api";

fn init_tracing() {
    // RUST_LOG=info,hub_mock=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    let state = AppState::new(config.api_token.as_str());
    let app = build_router(state, &config.http);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        "hub fixture listening on {} ({:?})",
        listener.local_addr()?,
        config.app_env
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_router(state: AppState, limits: &HttpLimits) -> Router {
    let router = Router::new()
        .nest(HUB_API_PREFIX, api::hub::routes(state.clone()))
        .with_state(state);

    middleware::http::apply(router, limits)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("shutdown signal received");
}
