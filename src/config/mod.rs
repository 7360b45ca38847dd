pub mod loader;
pub mod types;

pub use loader::{load_server_config, parse_server_config};
pub use types::{ServerConfig, ServerOverrides};
