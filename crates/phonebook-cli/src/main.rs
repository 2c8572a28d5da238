// crates/phonebook-cli/src/main.rs - CLI Application Entry Point
//
// Entry point for the phonebook CLI. Each subcommand does one thing and
// prints plain lines to stdout so output can be piped into other tools.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │    ContactStore     │
//                        │ (config + store) │    │ (phonebook-core)    │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// phonebook add "Иванов,Иван,Иванович,Orga,111,222"
// phonebook display 1 --page-size 20
// phonebook search фамилия=Иванов организация=Orga
// phonebook --filename work.pb edit "<old line>" "<new line>"
// ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Configuration and store wiring
mod stdin; // Piped input for batch commands

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Printing the config template must work without any config or contact file
    if let Commands::Config = cli.command {
        return commands::config::handle();
    }

    let ctx = Context::new(cli.filename, cli.config)?;

    match cli.command {
        Commands::Display {
            page,
            page_size,
            json,
        } => commands::display::handle(&ctx, page, page_size, json),
        Commands::Add { contact } => commands::add::handle(&ctx, contact),
        Commands::Edit { old, new } => commands::edit::handle(&ctx, &old, &new),
        Commands::Search { criteria, json } => commands::search::handle(&ctx, &criteria, json),
        Commands::Config => unreachable!(), // Already handled above
    }
}

/// Install the stderr log subscriber
///
/// RUST_LOG wins when set; otherwise `warn`, or `debug` with --verbose.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
