use crate::cli::args::Args;
use crate::cli::output::ReportWriter;
use crate::core::stripper::{strip, StripStats};
use crate::domain::config::NbStripConfig;
use crate::domain::error::NbStripResult;
use crate::infrastructure::config::{ConfigManager, LoadedConfig};
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::notebook_io::{
    read_notebook, read_notebook_file, write_notebook, write_notebook_file, STDIN_NAME,
};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOptions {
    pub inputs: Vec<PathBuf>,
    pub inplace: bool,
    pub strip_prompt: bool,
    pub indent: usize,
}

impl StripOptions {
    /// Combine command line flags with loaded configuration. Flags win.
    pub fn resolve(args: &Args, config: &NbStripConfig) -> Self {
        Self {
            inputs: args.inputs.clone(),
            inplace: args.inplace,
            strip_prompt: args.strip_prompt || config.strip_prompt,
            indent: args.indent.unwrap_or(config.indent),
        }
    }
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            inplace: false,
            strip_prompt: false,
            indent: NbStripConfig::default().indent,
        }
    }
}

/// Outcome for one processed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Input path, or `<stdin>`
    pub source: String,
    #[serde(flatten)]
    pub stats: StripStats,
}

/// Execute CLI command
pub fn execute_command(args: Args) -> NbStripResult<()> {
    // Load configuration using ConfigManager. Only an explicit file is fatal.
    let config_manager = ConfigManager::new();
    let loaded = if let Some(config_path) = &args.config {
        LoadedConfig {
            config: config_manager.load_config_from_path(config_path)?,
            skipped: Vec::new(),
        }
    } else {
        config_manager.load_config()
    };
    let config = &loaded.config;

    // Initialize logging
    if !args.quiet {
        let level = if args.verbose { "debug" } else { config.log_level.as_str() };
        if let Err(e) = init_logging(level) {
            eprintln!("Warning: failed to initialize logging: {}", e);
        }
    }
    loaded.log_skipped();

    let options = StripOptions::resolve(&args, config);
    debug!(?options, "resolved options");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reports = strip_outputs(&options, stdin.lock(), stdout.lock())?;

    if let Some(format) = args.report {
        ReportWriter::new(format).write_reports(&reports)?;
    }

    Ok(())
}

/// Strip every input named in `options`.
///
/// Without inputs a single notebook is read from `stdin` and written to
/// `stdout`. Inputs are processed in order and the first failure stops the
/// run; notebooks written before it stay written.
pub fn strip_outputs<R: Read, W: Write>(
    options: &StripOptions,
    stdin: R,
    mut stdout: W,
) -> NbStripResult<Vec<FileReport>> {
    if options.inputs.is_empty() {
        let mut nb = read_notebook(stdin)?;
        let stats = StripStats::measure(&nb, options.strip_prompt);
        strip(&mut nb, options.strip_prompt);
        write_notebook(&mut stdout, &nb, options.indent)?;
        info!(
            source = STDIN_NAME,
            outputs = stats.outputs,
            prompts = stats.prompts,
            "stripped notebook"
        );
        return Ok(vec![FileReport {
            source: STDIN_NAME.to_string(),
            stats,
        }]);
    }

    let mut reports = Vec::with_capacity(options.inputs.len());
    for path in &options.inputs {
        let mut nb = read_notebook_file(path)?;
        let stats = StripStats::measure(&nb, options.strip_prompt);
        strip(&mut nb, options.strip_prompt);

        if options.inplace {
            write_notebook_file(path, &nb, options.indent)?;
            info!(
                path = %path.display(),
                outputs = stats.outputs,
                prompts = stats.prompts,
                "rewrote notebook"
            );
        } else {
            write_notebook(&mut stdout, &nb, options.indent)?;
            info!(
                path = %path.display(),
                outputs = stats.outputs,
                prompts = stats.prompts,
                "stripped notebook"
            );
        }

        reports.push(FileReport {
            source: path.display().to_string(),
            stats,
        });
    }

    Ok(reports)
}
