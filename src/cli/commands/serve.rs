use super::CommandHandler;
use crate::config::{load_server_config, ServerConfig, ServerOverrides};
use crate::web::CatalogServer;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `serve` command
pub struct ServeCommand {
    pub config_file: Option<PathBuf>,
    pub overrides: ServerOverrides,
}

impl CommandHandler for ServeCommand {
    fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async move {
            let server = CatalogServer::new(config)?;
            server.run().await
        })
    }

    fn name(&self) -> &'static str {
        "serve"
    }
}

impl ServeCommand {
    /// Create new serve command
    pub fn new(config_file: Option<PathBuf>, overrides: ServerOverrides) -> Self {
        Self {
            config_file,
            overrides,
        }
    }

    /// File settings (or defaults) with command-line values on top.
    pub fn resolve_config(&self) -> Result<ServerConfig> {
        let base = match &self.config_file {
            Some(path) => load_server_config(path)?,
            None => ServerConfig::default(),
        };
        Ok(base.apply(self.overrides.clone()))
    }
}
