//! Argument parsing, logging setup, and command dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use falcogen_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};

use crate::client::{AppContext, CliError, CliResult};
use crate::commands::fetch::handle_fetch;
use crate::commands::generate::handle_generate;
use crate::commands::ident::handle_ident;

/// Parses CLI arguments, installs logging, and executes the requested command.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("error: {err}");
        return 3;
    }

    match dispatch(&cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Command::Ident(args) => emit(&handle_ident(args)),
        Command::Fetch => {
            let ctx = AppContext::from_cli(cli)?;
            let files = handle_fetch(&ctx).await?;
            let listing = files
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            emit(&listing)
        }
        Command::Generate(args) => {
            let ctx = AppContext::from_cli(cli)?;
            match handle_generate(&ctx, args).await? {
                Some(source) => emit(source.trim_end_matches('\n')),
                None => Ok(()),
            }
        }
    }
}

fn emit(text: &str) -> CliResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")
        .and_then(|()| stdout.flush())
        .map_err(|err| CliError::failure(anyhow!("failed to write to stdout: {err}")))
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse::<LogFormat>().map_err(|err| err.to_string())
}

#[derive(Parser)]
#[command(
    name = "falcogen",
    about = "Download the Falco sources and generate fixture accessor modules"
)]
pub(crate) struct Cli {
    #[arg(long, global = true, env = "FALCOGEN_CONFIG")]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, global = true, env = "FALCOGEN_DOWNLOAD_DIR")]
    pub(crate) download_dir: Option<PathBuf>,
    #[arg(long, global = true, env = "FALCOGEN_URL")]
    pub(crate) url: Option<String>,
    #[arg(long, global = true, env = "FALCOGEN_HTTP_TIMEOUT_SECS", value_name = "SECS")]
    pub(crate) timeout: Option<u64>,
    #[arg(
        long,
        global = true,
        env = "FALCOGEN_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL
    )]
    pub(crate) log_level: String,
    #[arg(
        long,
        global = true,
        env = "FALCOGEN_LOG_FORMAT",
        value_parser = parse_log_format,
        help = "Log output format: json, pretty, or auto"
    )]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Download and unpack the source archive, then list the extracted files.
    Fetch,
    /// Render an accessor module for the files matching the given patterns.
    Generate(GenerateArgs),
    /// Print the identifier derived from a path.
    Ident(IdentArgs),
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Name of the generated module.
    #[arg(long)]
    pub(crate) package: String,
    /// Glob selecting files embedded inline, relative to the extracted root.
    #[arg(long = "inline", value_name = "GLOB")]
    pub(crate) inline: Vec<String>,
    /// Glob selecting files referenced by path, relative to the extracted root.
    #[arg(long = "local", value_name = "GLOB")]
    pub(crate) local: Vec<String>,
    /// Leading text removed from relative paths before deriving identifiers.
    #[arg(long, default_value = "")]
    pub(crate) prefix: String,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct IdentArgs {
    /// Path to convert.
    pub(crate) path: String,
    /// Leading text removed before conversion.
    #[arg(long, default_value = "")]
    pub(crate) prefix: String,
}
