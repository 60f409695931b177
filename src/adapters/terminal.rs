use crate::domain::model::Joke;
use crate::domain::ports::DisplaySurface;
use crate::utils::error::{JokeError, Result};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

pub const DEFAULT_ERROR_PREFIX: &str = "⚠️  ";

/// Renders jokes as plain text on a writer, one block per fetch.
pub struct TerminalDisplay<W: Write + Send> {
    writer: Mutex<W>,
    error_prefix: String,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            error_prefix: DEFAULT_ERROR_PREFIX.to_string(),
        }
    }

    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|_| JokeError::IoError(io::Error::other("display writer lock poisoned")))
    }

    fn write_block(&self, text: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| JokeError::IoError(io::Error::other("display writer lock poisoned")))?;

        writeln!(writer, "{}", text)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> DisplaySurface for TerminalDisplay<W> {
    fn show_joke(&self, joke: &Joke) -> Result<()> {
        self.write_block(&joke.text)
    }

    fn show_error(&self, error: &JokeError) -> Result<()> {
        let message = format!(
            "{}{} {}",
            self.error_prefix,
            error.user_friendly_message(),
            error.recovery_suggestion()
        );
        self.write_block(&message)
    }
}
