use std::fmt::Display;

/// Work the event thread performs outside the render loop.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Copy the site link to the terminal clipboard.
    Share,
    /// Export the page as plain text.
    Print,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Share => write!(f, "share"),
            Command::Print => write!(f, "print"),
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Event {
    ExecCommand(Command),
    Quit,
}

#[cfg(test)]
#[path = "./tests/types_tests.rs"]
mod tests;
