pub mod handlers;

use crate::{Result, config::DemoServerConfig};
use axum::{Router, routing::any};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the demo hello router from `config`.
pub fn router(config: &DemoServerConfig) -> Router {
    let state = handlers::AppState {
        greeting: config.greeting.as_str().into(),
    };

    let mut app = Router::new().route("/", any(handlers::home));
    if config.health_check {
        app = app.route("/health", any(handlers::health));
    }

    app.fallback(handlers::home)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: DemoServerConfig) -> Result<()> {
    let app = router(&config);

    let addr = SocketAddr::new(config.host.parse()?, config.port);

    info!("Starting simple web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub(crate) async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
