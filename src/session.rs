use std::sync::Arc;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::transliterate::TransliterationInterface;

pub const PROMPT: &str = "Enter English text to transliterate to Kannada (or 'quit'): ";
pub const NO_SUGGESTIONS: &str = "No suggestions found.";
pub const FETCH_FAILED: &str = "An error occurred. Could not fetch suggestions.";

/// What to do with one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Skip,
    Transliterate(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        if line.eq_ignore_ascii_case("quit") {
            Command::Quit
        } else if line.trim().is_empty() {
            Command::Skip
        } else {
            Command::Transliterate(line.to_string())
        }
    }
}

/// Format suggestions as a numbered list followed by a separator line
pub fn render_suggestions(suggestions: &[String]) -> String {
    let mut out = String::from("\nSuggestions:\n");
    for (i, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, suggestion));
    }
    out.push_str(&"-".repeat(20));
    out.push('\n');
    out
}

/// Interactive read-eval-print loop around a transliterator
pub struct Session {
    transliterator: Arc<dyn TransliterationInterface>,
}

impl Session {
    pub fn new(transliterator: Arc<dyn TransliterationInterface>) -> Self {
        Self { transliterator }
    }

    /// Run until `quit` or end of input. Provider errors are reported and the loop continues.
    pub async fn run<R, W>(&self, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                None => {
                    debug!("End of input");
                    writer.write_all(b"\n").await?;
                    break;
                }
            };

            match Command::parse(&line) {
                Command::Quit => {
                    info!("Quit requested");
                    break;
                }
                Command::Skip => continue,
                Command::Transliterate(text) => {
                    let output = self.handle(&text).await;
                    writer.write_all(output.as_bytes()).await?;
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }

    async fn handle(&self, text: &str) -> String {
        match self.transliterator.transliterate_text(text).await {
            Ok(suggestions) if suggestions.is_empty() => format!("{}\n", NO_SUGGESTIONS),
            Ok(suggestions) => render_suggestions(&suggestions),
            Err(e) => {
                error!("Transliteration of {:?} failed: {}", text, e);
                format!("{}\n", FETCH_FAILED)
            }
        }
    }
}
