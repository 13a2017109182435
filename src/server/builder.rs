//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::build_directory_routes;
use crate::config::DirectoryConfig;
use crate::core::InstallerSource;
use crate::storage::Catalog;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the directory HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(DirectoryConfig::from_yaml_file("directory.yaml")?)
///     .load_catalog(&FileSource::new("data/installers.yaml"))
///     .await?
///     .build()?;
/// ```
pub struct ServerBuilder {
    catalog: Option<Catalog>,
    config: DirectoryConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            catalog: None,
            config: DirectoryConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: DirectoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set an already built catalog
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load the catalog from a source
    pub async fn load_catalog(mut self, source: &dyn InstallerSource) -> Result<Self> {
        self.catalog = Some(Catalog::load(source).await?);
        Ok(self)
    }

    /// Add routes outside the directory API (static files, admin pages)
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        self.config.validate()?;
        let catalog = self.catalog.ok_or_else(|| {
            anyhow::anyhow!("Catalog is required. Call .with_catalog() or .load_catalog()")
        })?;

        let state = AppState {
            catalog: Arc::new(catalog),
            config: Arc::new(self.config),
        };

        let app = self
            .custom_routes
            .into_iter()
            .fold(build_directory_routes(state), |app, routes| app.merge(routes));

        Ok(app
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `server.bind` from the configuration and stops on SIGTERM or
    /// Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
