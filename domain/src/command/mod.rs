//! Command line lexing and parsing

pub mod lexer;
pub mod parser;

pub use parser::{COMMAND_NAME, LIST_VERB, ParsedCommand, parse_command};
