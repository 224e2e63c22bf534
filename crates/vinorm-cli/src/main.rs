//! Vietnamese text normalizer command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use text_normalizer::Normalizer;
use tracing::info;
use vinorm_core::{NormalizerConfig, ResourceConfig};

mod commands;
mod logging;

use logging::LogFormat;

/// Vietnamese text normalizer for speech synthesis
#[derive(Debug, Parser)]
#[command(name = "vinorm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides the config file; RUST_LOG overrides both)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (json or text)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory with RegexRule/, Mapping/ and Dict/ (defaults to the built-in tables)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep raw punctuation instead of collapsing it to "." and ","
    #[arg(long, global = true)]
    punc: bool,

    /// Keep unknown upper-case tokens as written instead of spelling them
    #[arg(long, global = true)]
    unknown: bool,

    /// Lower-case the output
    #[arg(long, global = true)]
    lower: bool,

    /// Stop after the regex rules (for rule debugging)
    #[arg(long, global = true)]
    rule: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a piece of text
    Normalize {
        /// Input text
        input: String,
    },

    /// Normalize a file line by line
    File {
        /// Input text file
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version and table info
    Info,
}

impl Cli {
    /// Load the config file, then apply command-line overrides.
    fn config(&self) -> Result<NormalizerConfig> {
        let mut config = match &self.config {
            Some(path) => NormalizerConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => NormalizerConfig::default(),
        };

        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(format) = self.log_format {
            config.logging.format = match format {
                LogFormatArg::Json => "json",
                LogFormatArg::Text => "text",
            }
            .to_string();
        }
        if let Some(dir) = &self.data_dir {
            config.resources = ResourceConfig {
                data_dir: Some(dir.clone()),
            };
        }

        let options = &mut config.options;
        options.keep_punctuation |= self.punc;
        options.unknown_passthrough |= self.unknown;
        options.lowercase_output |= self.lower;
        options.rule_only |= self.rule;

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    let format: LogFormat = config
        .logging
        .format
        .parse()
        .map_err(anyhow::Error::msg)
        .context("invalid log format")?;
    logging::init_logging(&config.logging.level, format);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting vinorm");

    let normalizer = Normalizer::from_config(&config.resources);

    match cli.command {
        Commands::Normalize { input } => {
            commands::normalize::run(&normalizer, &input, &config.options);
        }
        Commands::File { input, output } => {
            commands::file::run(&normalizer, &input, output.as_deref(), &config.options)
                .context("file normalization failed")?;
        }
        Commands::Info => {
            commands::info::run(&normalizer, &config.resources);
        }
    }

    Ok(())
}
