//! Configuration file schema and loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig,
};
pub use loader::ConfigLoader;
