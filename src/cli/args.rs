use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command line arguments for nbstrip
#[derive(Parser, Debug)]
#[command(
    name = "nbstrip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clear outputs of IPython notebooks",
    long_about = "Clear outputs of IPython notebooks.\n\n\
        By default, the notebooks are printed without outputs to stdout. \
        When the --inplace option is given, all files will be overwritten. \
        If no input is given, stdin is used and output is printed to stdout."
)]
pub struct Args {
    /// Paths to notebook files
    #[arg(value_name = "input")]
    pub inputs: Vec<PathBuf>,

    /// Overwrite existing notebook when given
    #[arg(short, long)]
    pub inplace: bool,

    /// Strip also the prompt numbers
    #[arg(long)]
    pub strip_prompt: bool,

    /// Spaces per indentation level in the written notebook
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Print a report of what was stripped to stderr
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub report: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Report format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_inputs() {
        let args = Args::try_parse_from(["nbstrip"]).unwrap();
        assert!(args.inputs.is_empty());
        assert!(!args.inplace);
        assert!(!args.strip_prompt);
        assert!(args.report.is_none());
    }

    #[test]
    fn test_inputs_and_flags() {
        let args = Args::try_parse_from([
            "nbstrip", "-i", "--strip-prompt", "a.ipynb", "b.ipynb",
        ])
        .unwrap();
        assert_eq!(args.inputs, vec![PathBuf::from("a.ipynb"), PathBuf::from("b.ipynb")]);
        assert!(args.inplace);
        assert!(args.strip_prompt);
    }

    #[test]
    fn test_long_inplace() {
        let args = Args::try_parse_from(["nbstrip", "--inplace", "a.ipynb"]).unwrap();
        assert!(args.inplace);
    }

    #[test]
    fn test_report_format() {
        let args = Args::try_parse_from(["nbstrip", "--report", "table"]).unwrap();
        assert_eq!(args.report, Some(OutputFormat::Table));
        assert!(Args::try_parse_from(["nbstrip", "--report", "csv"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["nbstrip", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }
}
