//! # Command Parsing
//!
//! Turn one trimmed input line into a typed [`Command`].
//!
//! ## Design Principles
//!
//! 1. **Tagged Variants**: Each verb maps to exactly one enum variant, so the
//!    dispatcher is a single `match`.
//! 2. **Literal Tokenization**: Lines are split on single spaces; consecutive
//!    spaces produce empty tokens that survive into the lookup subject.
//! 3. **Exact Match**: No prefix matching and no case folding.

/// A command parsed from one client line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `wiki [term...]`; `subject` is `None` when no argument tokens follow.
    Wiki { subject: Option<String> },
    /// `quit` or `exit`
    Quit,
    /// Any other verb, kept verbatim.
    Unknown(String),
}

impl Command {
    /// Parses a line that has already been trimmed and is non-empty.
    ///
    /// **Input**: `line` such as `"wiki Rust language"`.
    /// **Output**: `Command::Wiki { subject: Some("Rust language") }`.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split(' ');
        let verb = tokens.next().unwrap_or_default();

        match verb {
            "help" => Command::Help,
            "wiki" => {
                let rest: Vec<&str> = tokens.collect();
                let subject = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                Command::Wiki { subject }
            }
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Returns the verb this command was parsed from, for logging.
    pub fn verb(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::Wiki { .. } => "wiki",
            Command::Quit => "quit",
            Command::Unknown(verb) => verb,
        }
    }
}
