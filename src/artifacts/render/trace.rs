use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::render::options::GraphOptions;
use crate::artifacts::render::{BranchHandle, CommitSpec, Renderer};
use std::io::Write;

/// One recorded graph mutation, in the order the interpreter issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    BranchCreated {
        handle: BranchHandle,
        name: BranchName,
        from: Option<BranchHandle>,
    },
    Committed {
        branch: BranchHandle,
        spec: CommitSpec,
    },
    Merged {
        target: BranchHandle,
        source: BranchHandle,
    },
}

/// Renderer that records mutations instead of drawing them.
///
/// Backs the `render` subcommand's textual output and doubles as the test
/// double for interpreter behavior. Handles are minted sequentially, so the
/// handle value is also the index into the recorded branch names.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    branch_names: Vec<BranchName>,
    events: Vec<GraphEvent>,
    options: Option<GraphOptions>,
}

impl TraceRenderer {
    pub fn events(&self) -> &[GraphEvent] {
        &self.events
    }

    pub fn options(&self) -> Option<&GraphOptions> {
        self.options.as_ref()
    }

    pub fn branch_name(&self, handle: BranchHandle) -> Option<&BranchName> {
        self.branch_names.get(handle.value() as usize)
    }

    /// Writes the recorded trace, one line per mutation.
    pub fn write_trace(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        for event in &self.events {
            match event {
                GraphEvent::BranchCreated { name, from, .. } => match from {
                    Some(from) => writeln!(out, "branch {} <- {}", name, self.lane(*from))?,
                    None => writeln!(out, "branch {}", name)?,
                },
                GraphEvent::Committed { branch, spec } => match &spec.dot_text {
                    Some(label) => {
                        writeln!(out, "commit {} \"{}\" [{}]", self.lane(*branch), spec.subject, label)?
                    }
                    None => writeln!(out, "commit {} \"{}\"", self.lane(*branch), spec.subject)?,
                },
                GraphEvent::Merged { target, source } => {
                    writeln!(out, "merge {} <- {}", self.lane(*target), self.lane(*source))?
                }
            }
        }

        Ok(())
    }

    fn lane(&self, handle: BranchHandle) -> &str {
        self.branch_name(handle).map(|n| n.as_ref()).unwrap_or("?")
    }
}

impl Renderer for TraceRenderer {
    fn configure(&mut self, options: &GraphOptions) -> anyhow::Result<()> {
        self.options = Some(options.clone());
        Ok(())
    }

    fn create_branch(
        &mut self,
        name: &BranchName,
        from: Option<BranchHandle>,
    ) -> anyhow::Result<BranchHandle> {
        let handle = BranchHandle::new(self.branch_names.len() as u64);
        self.branch_names.push(name.clone());
        self.events.push(GraphEvent::BranchCreated {
            handle,
            name: name.clone(),
            from,
        });

        Ok(handle)
    }

    fn commit(&mut self, branch: BranchHandle, spec: CommitSpec) -> anyhow::Result<()> {
        self.events.push(GraphEvent::Committed { branch, spec });
        Ok(())
    }

    fn merge(&mut self, target: BranchHandle, source: BranchHandle) -> anyhow::Result<()> {
        self.events.push(GraphEvent::Merged { target, source });
        Ok(())
    }
}
