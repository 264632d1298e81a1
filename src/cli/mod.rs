use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

use fcsparse::{FcsFile, ParserConfig, TextEncoding};

mod config;
mod info;
mod validate;

pub use config::Config;

/// fcsparse - Flow Cytometry Standard (FCS) metadata reader
#[derive(Parser)]
#[command(name = "fcsparse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// TEXT segment encoding (overrides the config file)
    #[arg(short = 'e', long, value_enum, global = true)]
    encoding: Option<EncodingArg>,

    #[command(subcommand)]
    command: Commands,
}

/// TEXT segment encoding selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EncodingArg {
    /// ISO-8859-1, one byte per character (never fails)
    Latin1,
    /// Strict UTF-8
    Utf8,
}

impl From<EncodingArg> for TextEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Latin1 => TextEncoding::Latin1,
            EncodingArg::Utf8 => TextEncoding::Utf8,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display HEADER offsets and TEXT keywords of an FCS file
    Info {
        /// Input FCS file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the parsed file as JSON
        #[arg(long)]
        json: bool,

        /// Only print these keywords (repeatable, case-insensitive)
        #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
        keywords: Vec<String>,
    },

    /// Check HEADER offsets and standard keywords for consistency
    Validate {
        /// Input FCS file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let parser_config = config.parser_config(cli.encoding.map(TextEncoding::from));
    debug!("Parser configuration: {:?}", parser_config);

    match cli.command {
        Commands::Info {
            file,
            json,
            keywords,
        } => {
            let options = info::InfoOptions {
                json: json || config.output.json.unwrap_or(false),
                pretty: config.output.pretty.unwrap_or(true),
                keywords,
            };
            info::run(file, &parser_config, &options)
        }
        Commands::Validate { file } => validate::run(file, &parser_config),
    }
}

/// Open `path` and parse it as an FCS file
fn load(path: &Path, config: &ParserConfig) -> Result<FcsFile> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    let handle = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    fcsparse::parse_with_config(handle, config)
        .with_context(|| format!("Failed to parse FCS file {}", path.display()))
}
