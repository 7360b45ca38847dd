use crate::telemetry::LogLevel;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// gdoc: browse a module catalog as a tree or as live HTML pages
#[derive(Parser)]
#[command(name = "gdoc")]
#[command(version)]
#[command(about = "Browse a JSON module catalog as a console tree or live-reloading HTML pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the catalog as a tree
    Tree {
        /// Depth of detail: 0 root, 1 packages, 2 modules, 3+ module fields
        #[arg(default_value_t = 0)]
        verbosity: u32,

        /// JSON catalog source
        #[arg(short, long, default_value = "g.json")]
        source: PathBuf,

        /// Label for the tree root
        #[arg(short, long, default_value = "gsdk")]
        name: String,
    },

    /// Serve the catalog over HTTP, reloading the source every 2 seconds
    Serve {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON catalog source
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Address to listen on
        #[arg(short, long)]
        listen: Option<SocketAddr>,

        /// Directory served under /static/
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Title of the listing page
        #[arg(short, long)]
        name: Option<String>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Tree { .. } => "tree",
            Commands::Serve { .. } => "serve",
        }
    }
}
