//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, then hands the
//! operation to the handler. Errors become process exit codes here.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lmwrap_cli::{Cli, CliConfig, CliError, OutputFormat, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let format = OutputFormat::from_json_flag(cli.json);
    let dispatcher = bootstrap(CliConfig::from_cli(&cli))?;
    let operation = cli.command.into_operation();
    handlers::execute(&dispatcher, &operation, format)?;
    Ok(())
}

fn main() -> ExitCode {
    // Load .env before the tool path and capture dir are resolved
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
