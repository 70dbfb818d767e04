pub mod cli;
pub mod core;

use crate::cli::convert::ConvertRequest;
use crate::core::config::{AppConfig, OutputFormat};
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        request: ConvertRequest,
        mixed: bool,
        output: Option<OutputFormat>,
    },
    Interactive {
        mixed: bool,
        output: Option<OutputFormat>,
    },
}

/// Command line flags win over the config file; `--mixed` can only turn
/// mixed payment on.
pub fn resolve_settings(
    config: &AppConfig,
    mixed: bool,
    output: Option<OutputFormat>,
) -> (bool, OutputFormat) {
    (mixed || config.mixed_payment, output.unwrap_or(config.output))
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("kasa starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert {
            request,
            mixed,
            output,
        } => {
            let (mixed, output) = resolve_settings(&config, mixed, output);
            cli::convert::run(&request, mixed, output)
        }
        AppCommand::Interactive { mixed, output } => {
            let (mixed, output) = resolve_settings(&config, mixed, output);
            cli::interactive::run_stdio(mixed, output)
        }
    }
}
