use crate::export::{ExportFormat, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for shiftscan
/// Recover shift records from the OCR text of a photographed shift table
#[derive(Parser)]
#[command(
    name = "shiftscan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse OCR text of a shift table into structured shift records",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log every sequencing decision to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the configuration in effect
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the default configuration file path")]
        path: bool,
    },

    /// Parse OCR text into shift records
    Parse {
        /// OCR text file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Year of the table date (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show how each line of the OCR text is classified
    Classify {
        /// OCR text file (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Print the reply-style summary of the parsed shifts
    Summary {
        /// OCR text file (reads stdin when omitted)
        input: Option<PathBuf>,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Export parsed shift records to a file
    Export {
        /// OCR text file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        year: Option<i32>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
