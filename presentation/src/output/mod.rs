//! Output formatting

pub mod console;

pub use console::{ALREADY_ADDED_NOTICE, ConsoleFormatter, set_color_enabled};
