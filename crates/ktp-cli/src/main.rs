//! CLI application for cleaning and structuring Indonesian ID document OCR
//! output.

mod commands;

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, process};
use ktp_core::KtpConfig;

/// KTP OCR cleaner - Turn raw OCR output of Indonesian ID documents into validated records
#[derive(Parser)]
#[command(name = "ktp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean and structure a single OCR output file (or stdin)
    Process(process::ProcessArgs),

    /// Clean and structure multiple OCR output files
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Usage errors exit with 1, help and version with 0.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args, &load_config(cli.config.as_deref())?),
        Commands::Batch(args) => batch::run(args, &load_config(cli.config.as_deref())?),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}

/// Explicit config file, else the default location if it exists, else
/// built-in defaults.
fn load_config(path: Option<&str>) -> anyhow::Result<KtpConfig> {
    if let Some(path) = path {
        return Ok(KtpConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        tracing::debug!("Loading config from {}", default_path.display());
        Ok(KtpConfig::from_file(&default_path)?)
    } else {
        Ok(KtpConfig::default())
    }
}
