//! Script parsing
//!
//! A script is plain text, one command per line. Parsing keeps going past
//! bad lines: anything unparseable becomes a [`Diagnostic`] instead of an
//! error, so a single typo never takes down a whole render.
//!
//! [`Diagnostic`]: diagnostic::Diagnostic

pub mod command;
pub mod diagnostic;

use crate::artifacts::script::command::Command;
use crate::artifacts::script::diagnostic::Diagnostic;
use derive_new::new;

pub const COMMENT_PREFIX: char = '#';

/// One retained script line with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ScriptLine {
    number: usize,
    command: Command,
}

impl ScriptLine {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

/// A parsed script: the executable lines plus everything that did not parse.
#[derive(Debug, Default)]
pub struct Script {
    lines: Vec<ScriptLine>,
    diagnostics: Vec<Diagnostic>,
}

impl Script {
    /// Splits `text` on newlines, trims every line, drops blank lines and
    /// `#` comments, and parses what remains. Token splitting is on single
    /// spaces, matching the script format exactly: consecutive spaces produce
    /// empty tokens rather than being collapsed.
    pub fn parse(text: &str) -> Self {
        let mut script = Script::default();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let number = index + 1;
            match Command::try_parse(line) {
                Ok(command) => script.lines.push(ScriptLine::new(number, command)),
                Err(failure) => script.diagnostics.push(Diagnostic::from_failure(number, &failure)),
            }
        }

        script
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
