use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Join or fuzzy-match the contents of two documents.
#[derive(Debug, Parser)]
#[command(name = "docjoin", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full pipeline over two input files
    Run {
        /// First input file
        #[arg(value_name = "FILE_A")]
        file_a: PathBuf,

        /// Second input file
        #[arg(value_name = "FILE_B")]
        file_b: PathBuf,

        /// Join mode applied when both inputs are tabular
        #[arg(long, value_enum, default_value_t = JoinModeArg::Inner)]
        mode: JoinModeArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Minimum column-name similarity; pairs must score above it
        #[arg(long, default_value_t = 80.0)]
        column_threshold: f64,

        /// Minimum line similarity; lines must score at or above it
        #[arg(long, default_value_t = 85.0)]
        text_threshold: f64,

        /// Override the sniffed format of the first input
        #[arg(long, value_enum)]
        format_a: Option<FormatArg>,

        /// Override the sniffed format of the second input
        #[arg(long, value_enum)]
        format_b: Option<FormatArg>,
    },

    /// Extract one file and show what the pipeline would see
    Extract {
        /// Input file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Override the sniffed input format
        #[arg(long, value_enum)]
        input_format: Option<FormatArg>,
    },
}

/// Relational join mode.
#[derive(Debug, Clone, ValueEnum)]
pub enum JoinModeArg {
    /// Keep only rows with matching keys on both sides
    Inner,
    /// Keep all rows from the first input
    Left,
    /// Keep all rows from the second input
    Right,
    /// Keep all rows from both inputs
    Outer,
}

impl JoinModeArg {
    /// Convert to the library's `JoinMode`.
    pub fn to_join_mode(&self) -> docjoin::JoinMode {
        match self {
            JoinModeArg::Inner => docjoin::JoinMode::Inner,
            JoinModeArg::Left => docjoin::JoinMode::Left,
            JoinModeArg::Right => docjoin::JoinMode::Right,
            JoinModeArg::Outer => docjoin::JoinMode::Outer,
        }
    }
}

/// Output format for both subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary plus the result body
    Text,
    /// JSON output
    Json,
    /// Raw result body only (CSV for tables, lines for text)
    Csv,
}

/// Input format override.
#[derive(Debug, Clone, ValueEnum)]
pub enum FormatArg {
    /// Page-based PDF document
    Pdf,
    /// Delimited text (comma/tab separated)
    Csv,
    /// Spreadsheet workbook (xlsx, xls, ods)
    Spreadsheet,
    /// Unstructured plain text
    Plaintext,
}

impl FormatArg {
    /// Convert to the library's `InputFormat`.
    pub fn to_input_format(&self) -> docjoin::InputFormat {
        match self {
            FormatArg::Pdf => docjoin::InputFormat::Pdf,
            FormatArg::Csv => docjoin::InputFormat::Csv,
            FormatArg::Spreadsheet => docjoin::InputFormat::Spreadsheet,
            FormatArg::Plaintext => docjoin::InputFormat::PlainText,
        }
    }
}
