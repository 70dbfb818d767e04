use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use kasa::cli::convert::ConvertRequest;
use kasa::core::config::OutputFormat;
use kasa::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct FormArgs {
    /// Add up payments in both currencies instead of converting them
    #[arg(short, long)]
    mixed: bool,

    /// Output format, defaults to the configured one
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fill the form once and print the change due
    Convert {
        /// Price in euro
        #[arg(long, allow_hyphen_values = true)]
        price_eur: Option<String>,
        /// Price in lev
        #[arg(long, allow_hyphen_values = true)]
        price_bgn: Option<String>,
        /// Amount paid in euro
        #[arg(long, allow_hyphen_values = true)]
        paid_eur: Option<String>,
        /// Amount paid in lev
        #[arg(long, allow_hyphen_values = true)]
        paid_bgn: Option<String>,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Edit the form line by line
    Interactive {
        #[command(flatten)]
        form: FormArgs,
    },
}

impl From<Commands> for kasa::AppCommand {
    fn from(cmd: Commands) -> kasa::AppCommand {
        match cmd {
            Commands::Convert {
                price_eur,
                price_bgn,
                paid_eur,
                paid_bgn,
                form,
            } => kasa::AppCommand::Convert {
                request: ConvertRequest {
                    price_eur,
                    price_bgn,
                    paid_eur,
                    paid_bgn,
                },
                mixed: form.mixed,
                output: form.output,
            },
            Commands::Interactive { form } => kasa::AppCommand::Interactive {
                mixed: form.mixed,
                output: form.output,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => kasa::cli::setup::setup(),
        Some(cmd) => kasa::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
