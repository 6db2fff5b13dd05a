use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::records::{MemoryRecordRepository, RecordService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Composition root: the store is created empty here and owned by the state.
pub fn build_state() -> ServerState {
    let repo = Arc::new(MemoryRecordRepository::new());
    ServerState::new(RecordService::new(repo))
}

pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(build_state(), build_cors(), cfg.server.enable_docs)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let app = build_app(&cfg);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, docs = cfg.server.enable_docs, "record store listening");
    serve(listener, app, shutdown_signal()).await
}
