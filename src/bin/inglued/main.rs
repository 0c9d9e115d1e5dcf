//! inglued CLI - header-only dependencies glued into your repository

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("inglued=debug")
    } else {
        EnvFilter::new("inglued=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let opts = commands::GlobalOpts {
        verbose: cli.verbose,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command.unwrap_or(Commands::Sync) {
        Commands::Sync => commands::sync::execute(opts),
        Commands::Cmake(args) => commands::cmake::execute(args, opts),
        Commands::Cmaketpl => commands::cmaketpl::execute(opts),
        Commands::List => commands::list::execute(opts),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
