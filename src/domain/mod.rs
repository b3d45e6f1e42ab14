// Domain module - Configuration and error types
pub mod config;
pub mod error;

pub use config::{NbStripConfig, NbStripConfigOverlay};
pub use error::{NbStripError, NbStripResult};
