use super::{build_router, AppState};
use crate::catalog::load_path;
use crate::config::ServerConfig;
use crate::state::{CatalogStore, ReloadScheduler};
use crate::{GdocError, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Catalog HTTP server with background reloading.
pub struct CatalogServer {
    config: ServerConfig,
    store: Arc<CatalogStore>,
    router: Router,
}

impl CatalogServer {
    /// Load the startup catalog and build the router.
    ///
    /// A catalog that fails to load here is fatal: the server never starts
    /// without a valid snapshot.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let library = load_path(&config.source)?;
        info!(
            path = %config.source.display(),
            packages = library.package_count(),
            modules = library.module_count(),
            "catalog loaded"
        );

        let store = Arc::new(CatalogStore::new(library));
        let state = Arc::new(AppState::new(store.clone(), config.library_name.clone()));
        let router = build_router(state, &config.static_dir);

        Ok(Self {
            config,
            store,
            router,
        })
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until Ctrl-C, reloading the catalog in the background.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen_addr).await?;
        let reload = ReloadScheduler::new(self.config.source.clone(), self.store.clone()).spawn();

        info!(addr = %self.config.listen_addr, "catalog server listening");

        let served = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        reload.shutdown().await;
        served.map_err(|e| GdocError::Server(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
