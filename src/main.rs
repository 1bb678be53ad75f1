//
//  launchpad-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use launchpad_client::cli::{Cli, Commands};
use launchpad_client::exit_codes;
use launchpad_client::output::{OutputFormat, OutputWriter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::new(OutputFormat::default()).write_error(&format!("{e:#}"));
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("LP_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Root(cmd) => cmd.run(&cli.global).await,
        Commands::Get(cmd) => cmd.run(&cli.global).await,
        Commands::Follow(cmd) => cmd.run(&cli.global).await,
        Commands::Slice(cmd) => cmd.run(&cli.global).await,
        Commands::Save(cmd) => cmd.run(&cli.global).await,
        Commands::Patch(cmd) => cmd.run(&cli.global).await,
        Commands::NamedGet(cmd) => cmd.run(&cli.global).await,
        Commands::NamedPost(cmd) => cmd.run(&cli.global).await,
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("lp version {}", launchpad_client::VERSION);
            Ok(())
        }
    }
}
