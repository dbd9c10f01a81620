pub mod cli;
pub mod configs;
pub mod domain;
pub mod env_file;
pub mod error;
pub mod exporter;
pub mod session;
pub mod store;

pub use error::ExportError;
pub use exporter::{ExportReport, Exporter, export};
