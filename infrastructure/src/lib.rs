//! Infrastructure layer for quip
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use logging::JsonlCommandLogger;
pub use store::InMemoryQuoteStore;
