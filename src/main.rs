mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod server;
mod types;
mod view;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_tracing(verbose);

    if let Err(e) = run(cli).await {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "usuarios=debug,tower_http=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "usuarios", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        Commands::Serve(args) => {
            server::run(&args.host, args.port).await?;
        }
        Commands::List(args) => {
            let config = Config::load()?;
            commands::users::list(&config, args).await?;
        }
    }

    Ok(())
}
