//! pydep CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pydep::availability::PythonRuntime;
use pydep::cli::{Cli, RunCommand};
use pydep::config::ScanConfig;
use pydep::script::InstallTemplate;
use pydep::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pydep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pydep=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ScanConfig::new(cli.file);
    config.output = cli.output;
    config.install_command = InstallTemplate::new(cli.install_command)?;
    config.interpreter = cli.python;
    config.validate()?;

    let oracle = PythonRuntime::new(config.interpreter.clone());
    RunCommand::new(config, cli.json).execute(&oracle)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pydep starting with args: {:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
