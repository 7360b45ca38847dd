use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "g.json";
pub const DEFAULT_LIBRARY_NAME: &str = "gsdk";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Settings for the HTTP catalog server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// JSON catalog source, reloaded periodically
    pub source: PathBuf,
    /// Label shown at the root of the catalog
    pub library_name: String,
    pub listen_addr: SocketAddr,
    /// Directory served under /static/
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080))),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Values given on the command line; each one overrides the file value.
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    pub source: Option<PathBuf>,
    pub library_name: Option<String>,
    pub listen_addr: Option<SocketAddr>,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn apply(mut self, overrides: ServerOverrides) -> Self {
        if let Some(source) = overrides.source {
            self.source = source;
        }
        if let Some(name) = overrides.library_name {
            self.library_name = name;
        }
        if let Some(addr) = overrides.listen_addr {
            self.listen_addr = addr;
        }
        if let Some(dir) = overrides.static_dir {
            self.static_dir = dir;
        }
        self
    }
}
