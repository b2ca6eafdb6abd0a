//! The renderer contract
//!
//! The interpreter never draws anything itself. It talks to a [`Renderer`],
//! which owns every graph lane it creates and hands back opaque handles for
//! them. Layout, painting, and theming all live behind this trait.

pub mod options;
pub mod trace;

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::render::options::GraphOptions;
use derive_new::new;

/// Opaque identifier for a graph lane, issued and owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct BranchHandle(u64);

impl BranchHandle {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Payload for a single commit dot.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitSpec {
    /// Commit message shown next to the dot.
    pub subject: String,
    /// Optional short label drawn inside the dot (`C<n>` numbering).
    pub dot_text: Option<String>,
}

/// Graph-mutation capabilities the interpreter needs from a rendering layer.
///
/// Errors returned here are collaborator failures and propagate out of the
/// render pass; malformed script input never reaches this trait.
pub trait Renderer {
    /// Called once per render pass, before any mutation, with the pass-through
    /// display configuration.
    fn configure(&mut self, _options: &GraphOptions) -> anyhow::Result<()> {
        Ok(())
    }

    /// Creates a new lane forked from `from`, or a root lane when `from` is
    /// `None`.
    fn create_branch(
        &mut self,
        name: &BranchName,
        from: Option<BranchHandle>,
    ) -> anyhow::Result<BranchHandle>;

    fn commit(&mut self, branch: BranchHandle, spec: CommitSpec) -> anyhow::Result<()>;

    fn merge(&mut self, target: BranchHandle, source: BranchHandle) -> anyhow::Result<()>;
}
