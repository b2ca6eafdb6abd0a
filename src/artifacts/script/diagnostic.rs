use crate::artifacts::script::command::ParseFailure;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownCommand,
    ParseError,
}

/// A non-fatal problem with one script line.
///
/// Diagnostics are data, not errors: they ride along in the render report and
/// it is up to the caller whether to show them. The offending line is skipped,
/// interpreter state stays exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Diagnostic {
    line: usize,
    kind: DiagnosticKind,
    message: String,
}

impl Diagnostic {
    pub fn from_failure(line: usize, failure: &ParseFailure) -> Self {
        match failure {
            ParseFailure::UnknownCommand(name) => Self::new(
                line,
                DiagnosticKind::UnknownCommand,
                format!("unknown command: {}", name),
            ),
            ParseFailure::InvalidCommitNumber(None) => Self::new(
                line,
                DiagnosticKind::ParseError,
                "set_commit_num needs an integer argument".to_string(),
            ),
            ParseFailure::InvalidCommitNumber(Some(token)) => Self::new(
                line,
                DiagnosticKind::ParseError,
                format!("set_commit_num expects an integer, got '{}'", token),
            ),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
