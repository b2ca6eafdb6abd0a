use crate::artifacts::branch::branch_name::BranchName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Checkout,
    Commit,
    Merge,
    SetCommitNum,
}

static COMMANDS: phf::Map<&'static str, CommandKind> = phf::phf_map! {
    "checkout" => CommandKind::Checkout,
    "commit" => CommandKind::Commit,
    "merge" => CommandKind::Merge,
    "set_commit_num" => CommandKind::SetCommitNum,
};

/// A single parsed script command.
///
/// Argument lists mirror the script format rather than what a well-formed
/// invocation would need: `checkout` may carry zero names and `merge` may
/// carry none, both of which the interpreter treats as deliberate no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ensure every named branch exists, then make the last one current.
    Checkout(Vec<BranchName>),
    /// Commit onto the current branch with the given subject line.
    Commit(String),
    /// Merge the named branch into the current one.
    Merge(Option<BranchName>),
    /// Overwrite the commit counter.
    SetCommitNum(i64),
}

/// Why a line failed to parse. Turned into a [`Diagnostic`] by the script
/// parser, never into an error.
///
/// [`Diagnostic`]: crate::artifacts::script::diagnostic::Diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    UnknownCommand(String),
    /// `set_commit_num` without an argument or with one that is not an
    /// integer. The counter stays untouched in either case.
    InvalidCommitNumber(Option<String>),
}

impl Command {
    /// Parses one trimmed, non-empty, non-comment line.
    ///
    /// The first space-separated token selects the command, the rest are its
    /// arguments verbatim.
    pub fn try_parse(line: &str) -> Result<Self, ParseFailure> {
        let mut tokens = line.split(' ');
        // split always yields at least one item
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        match COMMANDS.get(name) {
            Some(CommandKind::Checkout) => {
                Ok(Command::Checkout(args.iter().map(|a| BranchName::from(*a)).collect()))
            }
            Some(CommandKind::Commit) => Ok(Command::Commit(args.join(" "))),
            Some(CommandKind::Merge) => {
                Ok(Command::Merge(args.first().map(|a| BranchName::from(*a))))
            }
            Some(CommandKind::SetCommitNum) => match args.first() {
                None => Err(ParseFailure::InvalidCommitNumber(None)),
                Some(token) => token
                    .parse::<i64>()
                    .map(Command::SetCommitNum)
                    .map_err(|_| ParseFailure::InvalidCommitNumber(Some(token.to_string()))),
            },
            None => Err(ParseFailure::UnknownCommand(name.to_string())),
        }
    }
}
