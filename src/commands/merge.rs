use crate::areas::interpreter::Interpreter;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::render::Renderer;

impl<R: Renderer> Interpreter<'_, R> {
    /// Merges `source` into the current branch.
    ///
    /// Every unresolvable case is a deliberate no-op: no source argument, a
    /// source that was never checked out, or no current branch to merge into.
    pub fn merge(&mut self, source: Option<&BranchName>) -> anyhow::Result<()> {
        let Some(source) = source else {
            return Ok(());
        };
        let (Some(target), Some(source)) = (self.current_branch(), self.branches().get(source))
        else {
            return Ok(());
        };

        self.renderer().merge(target, source)
    }
}
