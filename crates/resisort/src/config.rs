use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, ValueEnum};
use resisort_core::Sizing;

#[derive(Parser, Debug)]
#[command(name = "resisort")]
#[command(about = "Sort resistors into containers by value", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    pub debug: bool,

    #[command(flatten)]
    pub sizing: SizingArgs,

    /// File to read resistor values from, one per line. Reads stdin when omitted or "-"
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SizingArgs {
    /// How many resistors should be in one container at most
    #[arg(
        short = 'r',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub resistors_per_container: Option<u64>,

    /// Number of containers you can use
    #[arg(
        short = 'c',
        long = "containers",
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub containers: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Could not open file {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "stdin"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub input: Input,
    pub sizing: Sizing,
    pub format: OutputFormat,
}

impl TryFrom<Cli> for SortConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let to_usize = |value: u64, name: &str| {
            usize::try_from(value).with_context(|| format!("--{name} {value} is too large"))
        };

        let sizing = match (cli.sizing.resistors_per_container, cli.sizing.containers) {
            (Some(n), _) => Sizing::ResistorsPerContainer(to_usize(n, "resistors-per-container")?),
            (None, Some(n)) => Sizing::ContainerCount(to_usize(n, "containers")?),
            // Unreachable through clap, kept for library callers
            (None, None) => Sizing::Unspecified,
        };

        let input = match cli.file {
            Some(path) if path.as_os_str() != "-" => Input::File(path),
            _ => Input::Stdin,
        };

        Ok(SortConfig {
            input,
            sizing,
            format: cli.format,
        })
    }
}
