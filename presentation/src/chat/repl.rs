//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::ConsoleFormatter;
use quip_application::RunCommandUseCase;
use quip_domain::OutputFormat;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor, Result as RlResult};

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: RunCommandUseCase,
    history: bool,
    history_size: Option<usize>,
    format: OutputFormat,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunCommandUseCase) -> Self {
        Self {
            use_case,
            history: true,
            history_size: None,
            format: OutputFormat::Plain,
        }
    }

    /// Set whether to persist input history
    pub fn with_history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }

    /// Cap the number of history entries kept
    pub fn with_history_size(mut self, size: Option<usize>) -> Self {
        self.history_size = size;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the interactive REPL
    pub fn run(&self) -> RlResult<()> {
        let mut builder = Config::builder();
        if let Some(size) = self.history_size {
            builder = builder.max_history_size(size)?;
        }

        let mut rl: Editor<(), DefaultHistory> = Editor::with_config(builder.build())?;

        // Try to load history
        let history_path = if self.history {
            dirs::data_dir().map(|p| p.join("quip").join("history.txt"))
        } else {
            None
        };

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle slash commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_line(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Quip - Chat Mode               │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Quote commands:");
        println!("  quote <text>           - add a quote as written");
        println!("  quote uwu <text>       - uwu-ify, then add");
        println!("  quote piglatin <text>  - piglatin-ify, then add");
        println!("  quote list             - list stored quotes");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    fn process_line(&self, line: &str) {
        match self.use_case.execute(line) {
            Ok(outcome) => {
                let output = match self.format {
                    OutputFormat::Plain => ConsoleFormatter::format(&outcome),
                    OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
                };
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
    }
}
