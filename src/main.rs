use clap::Parser;
use gdoc::{
    cli::commands::{serve::ServeCommand, tree::TreeCommand, CommandHandler},
    cli::{Cli, Commands},
    config::ServerOverrides,
    telemetry::initialize_tracing,
};

fn main() {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Tree {
            verbosity,
            source,
            name,
        } => Box::new(TreeCommand::new(source, name, verbosity)),
        Commands::Serve {
            config,
            source,
            listen,
            static_dir,
            name,
        } => Box::new(ServeCommand::new(
            config,
            ServerOverrides {
                source,
                library_name: name,
                listen_addr: listen,
                static_dir,
            },
        )),
    };

    if let Err(err) = handler.execute() {
        tracing::error!(command = handler.name(), error = %err, "command failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
