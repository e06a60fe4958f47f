use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig, StoreConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use service::repository::{ItemRepository, MemberRepository};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Create the repositories once; handlers share them through `AppState`.
pub async fn build_state(store: &StoreConfig) -> AppState {
    let items = ItemRepository::new();
    if store.seed_items {
        items.seed_defaults().await;
    }
    AppState::new(items, MemberRepository::new())
}

fn load_bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let addr = server.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address `{addr}`: {e}")))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.store).await;
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr = load_bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, "item service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
