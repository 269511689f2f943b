use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use inquire::{InquireError, Text};

use crate::error::{FileError, InputError};
use crate::ui::Style;

/// Where the text to translate comes from. Exactly one source is used per
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// `-i/--input-file FILE`.
    File(PathBuf),
    /// The positional argument.
    Inline(String),
    /// Standard input: the whole stream when piped, an interactive line
    /// accumulator on a terminal.
    Stdin,
}

pub struct InputReader;

impl InputReader {
    /// Resolves the request text from `source`.
    ///
    /// Empty or whitespace-only text is rejected here, before any network
    /// traffic happens.
    pub fn resolve(source: &TextSource) -> Result<String> {
        let text = match source {
            TextSource::File(path) => Self::read_file(path)?,
            TextSource::Inline(text) => text.clone(),
            TextSource::Stdin => {
                if io::stdin().is_terminal() {
                    Self::read_interactive()?
                } else {
                    Self::read_stdin()?
                }
            }
        };

        if text.trim().is_empty() {
            return Err(InputError::Empty.into());
        }

        Ok(text)
    }

    fn read_file(path: &Path) -> Result<String, FileError> {
        std::fs::read_to_string(path).map_err(|err| FileError::classify(path, err))
    }

    fn read_stdin() -> Result<String, InputError> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map_err(InputError::Stdin)?;
        String::from_utf8(buffer).map_err(|_| InputError::NotUtf8)
    }

    /// Reads prompt lines and accumulates them until a blank line, end of
    /// stream, or cancellation.
    fn read_interactive() -> Result<String, InputError> {
        eprintln!(
            "{}",
            Style::hint("Enter text to translate; a blank line submits")
        );

        let mut lines: Vec<String> = Vec::new();
        loop {
            match Text::new(">").prompt() {
                Ok(line) if line.trim().is_empty() => break,
                Ok(line) => lines.push(line),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(err) => return Err(InputError::Prompt(err)),
            }
        }

        Ok(lines.join("\n"))
    }
}
