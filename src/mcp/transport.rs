use super::EmotionServer;
use crate::{
    Error, Result,
    config::{McpConfig, McpTransport},
    server::shutdown_signal,
};
use axum::Router;
use rmcp::{
    ServiceExt,
    transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    },
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn serve(server: EmotionServer, config: &McpConfig) -> Result<()> {
    match config.transport {
        McpTransport::Stdio => serve_stdio(server).await,
        McpTransport::StreamableHttp => serve_streamable_http(server, config).await,
    }
}

/// Serves MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: EmotionServer) -> Result<()> {
    info!("Serving MCP over stdio");

    let service = server
        .serve(rmcp::transport::io::stdio())
        .await
        .map_err(|e| Error::mcp(format!("Failed to start stdio MCP service: {}", e)))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| Error::mcp(format!("stdio MCP service failed: {}", e)))?;

    info!("stdio MCP service stopped: {:?}", reason);
    Ok(())
}

/// Router that mounts the streamable-HTTP MCP service at `path`.
pub fn router(server: EmotionServer, path: &str) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .nest_service(path, service)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve_streamable_http(server: EmotionServer, config: &McpConfig) -> Result<()> {
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let app = router(server, &config.path);

    info!("Serving MCP over streamable HTTP on {}{}", addr, config.path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
