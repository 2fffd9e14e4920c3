use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use fmtcheck::{
    DEFAULT_MAX_INPUT_BYTES, Format, ValidationConfig, ValidationResult, Validator, output,
};
use tracing_subscriber::EnvFilter;

use crate::server::{ServerConfig, serve};

const STDIN_SOURCE: &str = "<stdin>";

#[derive(Debug, Parser)]
#[command(
    name = "fmtcheck",
    version,
    about = "Check JSON, XML, YAML, CSV and Emmet text for syntax errors"
)]
pub struct Cli {
    /// Increase logging verbosity (-v request log, -vv bodies and debug events)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP validation service
    Serve(ServeArgs),
    /// Validate a file or standard input
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8082)]
    pub port: u16,

    /// Largest accepted request body and text, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_body_bytes: usize,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Format tag (json, xml, yaml, csv, emmet); inferred from the file extension when omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Report style
    #[arg(short, long, value_enum, default_value_t = OutputStyle::Human)]
    pub output: OutputStyle,

    /// Input file; standard input when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    Human,
    Json,
}

/// Parse the command line and run the selected command.
///
/// # Errors
///
/// Returns an error on unreadable input, an unknown format, or a server failure.
pub async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Serve(args) => {
            serve(ServerConfig {
                host: args.host,
                port: args.port,
                verbose: cli.verbose,
                max_body_bytes: args.max_body_bytes,
            })
            .await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => check(&args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the format from `--format`, falling back to the file extension.
///
/// # Errors
///
/// Returns an error for an unknown tag, or when neither a tag nor a
/// recognised extension is available.
pub fn resolve_format(tag: Option<&str>, file: Option<&Path>) -> anyhow::Result<Format> {
    if let Some(tag) = tag {
        return Ok(tag.parse::<Format>()?);
    }
    let Some(path) = file else {
        bail!("--format is required when reading from standard input");
    };
    Format::from_path(path).with_context(|| {
        format!(
            "cannot infer format from {}; pass --format",
            path.display()
        )
    })
}

/// Read the whole input as UTF-8.
///
/// # Errors
///
/// Returns an error if the file or standard input cannot be read or is not UTF-8.
pub fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

fn check(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let file = args.file.as_deref();
    let format = resolve_format(args.format.as_deref(), file)?;
    let text = read_input(file)?;
    let source = file.map_or_else(|| STDIN_SOURCE.to_owned(), |p| p.display().to_string());

    // The CLI reads whole files, so the size guard is not applied here.
    let validator = Validator::new(ValidationConfig::unbounded());
    let result = ValidationResult::from_errors(&validator.check_format(format, &text));
    tracing::debug!(%format, ok = result.ok, errors = result.errors_count(), "checked {source}");

    let mut stdout = std::io::stdout().lock();
    match args.output {
        OutputStyle::Json => output::write_json(&result, &mut stdout)?,
        OutputStyle::Human => {
            let mut buf = Vec::new();
            output::write_human(&result, format, &source, &mut buf)?;
            write_colored(&String::from_utf8_lossy(&buf), &mut stdout)?;
        }
    }

    Ok(if result.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Highlight the verdict line of a human report.
fn write_colored(report: &str, writer: &mut dyn Write) -> anyhow::Result<()> {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    for line in report.lines() {
        if line.starts_with('\u{2713}') {
            writeln!(writer, "{}", line.green().bold())?;
        } else if line.starts_with('\u{2717}') {
            writeln!(writer, "{}", line.red().bold())?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}
