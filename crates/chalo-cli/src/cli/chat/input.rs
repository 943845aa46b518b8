//! Async readline input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the loop sees three events: a
//! submitted line, end of input (Ctrl+D), or an interrupt (Ctrl+C).

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (already trimmed; may be empty).
    Message(String),
    /// End of input (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler for the chat prompt.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Build the input handler with the prompt shown before each line.
    ///
    /// The returned `SharedWriter` lets other output coexist with the
    /// prompt; the chat loop keeps it alive for the session's duration.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    /// Wait for the next input event.
    ///
    /// Read errors are folded into `Eof` so the loop winds down cleanly.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => {
                InputEvent::Message(line.trim().to_string())
            }
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Ok(rustyline_async::ReadlineEvent::Eof) | Err(_) => InputEvent::Eof,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
