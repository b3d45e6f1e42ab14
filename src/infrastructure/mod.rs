// Infrastructure module - External dependencies and adapters
pub mod config;
pub mod logging;
pub mod notebook_io;

pub use config::{ConfigManager, LoadedConfig};
pub use notebook_io::{read_notebook, read_notebook_file, write_notebook, write_notebook_file};
