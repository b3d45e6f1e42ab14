use crate::cli::args::OutputFormat;
use crate::cli::commands::FileReport;
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::NbStripError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Writes processing reports. Goes to stderr by default since stdout may be
/// carrying notebook documents.
pub struct ReportWriter {
    format: OutputFormat,
}

impl ReportWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn write_reports(&self, reports: &[FileReport]) -> Result<(), OutputError> {
        let stderr = io::stderr();
        self.write_reports_to(stderr.lock(), reports)
    }

    pub fn write_reports_to<W: Write>(&self, mut out: W, reports: &[FileReport]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                for report in reports {
                    writeln!(out, "{}:", report.source)?;
                    writeln!(out, "  Worksheets: {}", report.stats.worksheets)?;
                    writeln!(out, "  Cells: {}", report.stats.cells)?;
                    writeln!(out, "  Outputs cleared: {}", report.stats.outputs)?;
                    writeln!(out, "  Prompt numbers removed: {}", report.stats.prompts)?;
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(reports)?;
                writeln!(out, "{}", output)?;
            }
            OutputFormat::Table => {
                if !reports.is_empty() {
                    let table_data: Vec<ReportTableRow> = reports.iter().map(ReportTableRow::from).collect();
                    let table = Table::new(table_data);
                    writeln!(out, "{}", table)?;
                }
            }
        }
        Ok(())
    }
}

/// Table row for one processed notebook
#[derive(Tabled)]
struct ReportTableRow {
    source: String,
    worksheets: usize,
    cells: usize,
    outputs: usize,
    prompts: usize,
}

impl From<&FileReport> for ReportTableRow {
    fn from(report: &FileReport) -> Self {
        Self {
            source: report.source.clone(),
            worksheets: report.stats.worksheets,
            cells: report.stats.cells,
            outputs: report.stats.outputs,
            prompts: report.stats.prompts,
        }
    }
}
