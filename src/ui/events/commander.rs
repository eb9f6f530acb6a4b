#[cfg(test)]
use mockall::automock;

use base64::{engine::general_purpose::STANDARD, Engine};
use std::{
    error::Error,
    fs,
    io::{self, Write},
};

pub struct Commander {}

// generates mocked implementation of Commander when in test
#[cfg_attr(test, automock, allow(warnings))]
impl Commander {
    pub fn new() -> Self {
        Self {}
    }

    /// Places text on the system clipboard through the terminal's OSC 52
    /// escape. Works over ssh too, since the terminal emulator does the
    /// actual copying.
    pub fn copy_to_clipboard(&self, text: String) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout();
        write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        stdout.flush()?;
        Ok(())
    }

    /// Writes a plain text rendition of the page to a file.
    pub fn export_page(&self, path: String, contents: String) -> Result<(), Box<dyn Error>> {
        fs::write(path, contents)?;
        Ok(())
    }
}
