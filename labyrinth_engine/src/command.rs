//! Command module
//!
//! Describes possible commands used during gameplay.

/// Commands that take an argument, used to report what's missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Go,
    Take,
    Use,
}
impl Verb {
    /// Hint shown when the verb is typed without an argument.
    pub fn usage(self) -> &'static str {
        match self {
            Verb::Go => "Go where? For example: go north",
            Verb::Take => "Take what? For example: take torch",
            Verb::Use => "Use what? For example: use torch",
        }
    }
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Go(String),
    Help,
    Inventory,
    Look,
    MissingArgument(Verb),
    Quit,
    Solve,
    Take(String),
    Unknown(String),
    Use(String),
}

/// Parses an input line into a `Command`.
///
/// The first word selects the command (case-insensitive); everything after it is the
/// argument. Directions are lower-cased, item names are passed through as typed.
pub fn parse_command(input: &str) -> Command {
    let line = input.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let with_arg = |verb: Verb, build: fn(String) -> Command| {
        if arg.is_empty() {
            Command::MissingArgument(verb)
        } else {
            build(arg.to_string())
        }
    };

    match word.to_lowercase().as_str() {
        "look" => Command::Look,
        "go" => with_arg(Verb::Go, |dir| Command::Go(dir.to_lowercase())),
        "take" => with_arg(Verb::Take, Command::Take),
        "use" => with_arg(Verb::Use, Command::Use),
        "inventory" => Command::Inventory,
        "help" => Command::Help,
        "solve" => Command::Solve,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    }
}
