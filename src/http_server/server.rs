//! # HTTP Server
//!
//! Binds the company routes behind CORS, request tracing and trailing-slash
//! normalization, and serves them until a shutdown signal arrives.

use std::io;

use axum::extract::Request;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::rest_api::{company_routes, SharedContext};

use super::config::HttpServerConfig;

/// HTTP server for the company API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server for the given context
    pub fn new(config: HttpServerConfig, ctx: SharedContext) -> Self {
        let router = Self::build_router(&config, ctx);
        Self { config, router }
    }

    /// Build the router with all middleware except path normalization
    fn build_router(config: &HttpServerConfig, ctx: SharedContext) -> Router {
        company_routes(ctx)
            .layer(TraceLayer::new_for_http())
            .layer(config.cors_layer())
    }

    /// `host:port` as configured
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// The complete service, with trailing slashes trimmed before routing
    pub fn app(self) -> NormalizePath<Router> {
        // Must wrap the router: a layer added with Router::layer runs after routing.
        NormalizePathLayer::trim_trailing_slash().layer(self.router)
    }

    /// Serve until Ctrl-C or SIGTERM, then drain in-flight requests
    pub async fn start(self) -> io::Result<()> {
        let addr = self
            .config
            .listen_addr()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "Company API listening");

        let app = self.app();
        axum::serve(
            listener,
            axum::ServiceExt::<Request>::into_make_service(app),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}

/// Wait for Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
