// Core module - Notebook model and output stripping
pub mod notebook;
pub mod stripper;

pub use notebook::{Cell, Notebook, Worksheet};
pub use stripper::{strip, StripStats};
