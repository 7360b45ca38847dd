//! HTTP presentation of the catalog.
//!
//! Routes:
//! - `GET /` package/module listing
//! - `GET /package/?name=` one package
//! - `GET /module/?name=[&package=]` one module
//! - `GET /static/*` files from the configured static directory

pub mod handlers;
pub mod pages;
pub mod server;

pub use pages::{HtmlPages, PageRenderer};
pub use server::CatalogServer;

use crate::state::CatalogStore;
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub pages: Arc<dyn PageRenderer>,
    /// Title of the listing page
    pub library_name: String,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>, library_name: impl Into<String>) -> Self {
        Self {
            store,
            pages: Arc::new(HtmlPages),
            library_name: library_name.into(),
        }
    }

    /// Replace the page renderer
    pub fn with_pages(mut self, pages: Arc<dyn PageRenderer>) -> Self {
        self.pages = pages;
        self
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::library))
        .route("/package", get(handlers::package))
        .route("/package/", get(handlers::package))
        .route("/module", get(handlers::module))
        .route("/module/", get(handlers::module))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
