//! Parser for the `:` command prompt.

use crate::ui::colors::Theme;

/// Everything the prompt can do. One entry per page feature that is worth
/// reaching without its dedicated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Confetti,
    Focus,
    Access,
    Share,
    Print,
    Theme(Theme),
    Quote,
    Count(i32),
    Reset,
    Top,
}

/// Parses prompt input. The error is the message shown to the user, so it
/// names the command or the expected argument.
pub fn parse(input: &str) -> Result<PromptCommand, String> {
    let mut words = input.split_whitespace();

    let Some(command) = words.next() else {
        return Err(String::from("Empty command."));
    };

    let arg = words.next();

    match command {
        "confetti" => Ok(PromptCommand::Confetti),
        "focus" => Ok(PromptCommand::Focus),
        "access" => Ok(PromptCommand::Access),
        "share" => Ok(PromptCommand::Share),
        "print" => Ok(PromptCommand::Print),
        "quote" => Ok(PromptCommand::Quote),
        "reset" => Ok(PromptCommand::Reset),
        "top" => Ok(PromptCommand::Top),
        "theme" => match arg.and_then(Theme::try_from_string) {
            Some(theme) => Ok(PromptCommand::Theme(theme)),
            None => Err(String::from("Usage: theme <default|dark|creative>")),
        },
        "count" => match arg.and_then(|raw| raw.parse::<i32>().ok()) {
            Some(delta) => Ok(PromptCommand::Count(delta)),
            None => Err(String::from("Usage: count <signed number>")),
        },
        unknown => Err(format!("Unknown command: {unknown}")),
    }
}
