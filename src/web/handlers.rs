//! Request handlers: GET /, /package/, /module/
//!
//! Every handler acquires one snapshot up front and works only from it, so a
//! reload that lands mid-request cannot mix catalogs within a response.

use super::AppState;
use crate::error::RequestError;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct PackageQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModuleQuery {
    pub name: Option<String>,
    /// Restricts the lookup to one package when several share a module name
    pub package: Option<String>,
}

/// Full package/module listing
///
/// GET /
pub async fn library(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.store.snapshot();
    tracing::debug!(generation = snapshot.generation, "library page requested");
    Html(state.pages.library_page(&state.library_name, &snapshot))
}

/// One package
///
/// GET /package/?name=<package-name>
pub async fn package(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PackageQuery>,
) -> Result<Html<String>, RequestError> {
    let name = required(query.name)?;
    let snapshot = state.store.snapshot();
    let package = snapshot
        .library
        .package(&name)
        .ok_or_else(|| RequestError::NotFound {
            kind: "package",
            name: name.clone(),
        })?;
    Ok(Html(state.pages.package_page(&name, package)))
}

/// One module
///
/// GET /module/?name=<module-name>[&package=<package-name>]
pub async fn module(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ModuleQuery>,
) -> Result<Html<String>, RequestError> {
    let name = required(query.name)?;
    let snapshot = state.store.snapshot();

    let found = match query.package.filter(|p| !p.is_empty()) {
        Some(package_name) => snapshot
            .library
            .package(&package_name)
            .and_then(|package| package.get(&name))
            .map(|module| (package_name.clone(), module)),
        None => snapshot
            .library
            .find_module(&name)
            .map(|(package_name, module)| (package_name.to_string(), module)),
    };

    let (package_name, module) = found.ok_or_else(|| RequestError::NotFound {
        kind: "module",
        name: name.clone(),
    })?;
    Ok(Html(state.pages.module_page(&package_name, module)))
}

/// An absent and an empty `name` are both a missing parameter.
fn required(value: Option<String>) -> Result<String, RequestError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(RequestError::MissingParameter("name"))
}
