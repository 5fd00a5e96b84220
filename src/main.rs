use clap::Parser;
use side_diff::compare::{CompareError, Comparer};
use side_diff::config::{Config, ConfigError};
use side_diff::report::{self, HighlightColor, OutputFormat, ReportError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{Level, error, info};

/// side-diff - Compare two texts side by side, token by token
#[derive(Parser)]
#[command(name = "side-diff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Left-hand (A) input file
    file_a: PathBuf,

    /// Right-hand (B) input file
    file_b: PathBuf,

    /// Write the report to this path instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also keep a timestamped copy in the data directory
    #[arg(long)]
    save: bool,

    /// Report format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Highlight colour for HTML reports (overrides the config file)
    #[arg(long, value_enum)]
    color: Option<HighlightColor>,

    /// Milliseconds the diff may refine its alignment, 0 for no limit
    /// (overrides the config file)
    #[arg(long, value_name = "MS")]
    diff_timeout: Option<u64>,

    /// Persist the effective settings (after overrides) to the config file
    #[arg(long)]
    save_config: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(cli, Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mut config: Config) -> Result<(), CliError> {
    if let Some(timeout) = cli.diff_timeout {
        config.settings.diff_timeout_ms = timeout;
    }
    if let Some(format) = cli.format {
        config.settings.output_format = format;
    }
    if let Some(color) = cli.color {
        config.settings.highlight_color = color;
    }
    if cli.save_config {
        config.save()?;
    }
    let format = config.settings.output_format;
    let color = config.settings.highlight_color;

    let text_a = read_input(&cli.file_a)?;
    let text_b = read_input(&cli.file_b)?;

    let comparison = Comparer::from_settings(&config.settings).compare(&text_a, &text_b)?;
    info!(
        "Compared {:?} and {:?}: {} rows, {} changed",
        cli.file_a,
        cli.file_b,
        comparison.rows.len(),
        comparison.changed_rows()
    );

    // render fully before writing anything
    let rendered = report::render(&comparison, format, color)?;

    if cli.save {
        let path = report::save_report(&config.data_dir(), &rendered, format)?;
        info!("Saved a copy to {:?}", path);
    }

    match cli.output {
        Some(path) => report::write_report(&path, &rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
