//! nbstrip Library
//!
//! Clears execution outputs, and optionally prompt numbers, from IPython
//! notebooks so they diff cleanly under version control.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use domain::error::{NbStripError, NbStripResult};
pub use domain::config::NbStripConfig;
pub use crate::core::{strip, Cell, Notebook, StripStats, Worksheet};
pub use cli::{strip_outputs, FileReport, StripOptions};
pub use infrastructure::notebook_io::{read_notebook, read_notebook_file, write_notebook, write_notebook_file};
