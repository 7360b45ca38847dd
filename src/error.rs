use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;

/// An icon value that is neither a string nor a `{dark, light}` object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid icon format: {raw}")]
pub struct MalformedIcon {
    /// The offending JSON text, as it appeared in the source.
    pub raw: String,
}

/// Failure to produce a fresh catalog from the source file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read catalog source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("module '{module}' in package '{package}': {source}")]
    Icon {
        package: String,
        module: String,
        #[source]
        source: MalformedIcon,
    },
}

/// Per-request failures surfaced to HTTP callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl RequestError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            RequestError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(status = %status, error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

#[derive(Error, Debug)]
pub enum GdocError {
    #[error("Catalog error: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, GdocError>;
