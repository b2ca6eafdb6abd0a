use crate::areas::interpreter::Interpreter;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::render::Renderer;

impl<R: Renderer> Interpreter<'_, R> {
    /// Ensures every named branch exists, then checks out the last one.
    ///
    /// Unseen names are forked from whatever branch is current when that name
    /// is processed; the pointer only moves after the final name, so all
    /// names in one command fork from the same parent. An existing name is
    /// never re-created, but naming it last still moves the pointer. With no
    /// names at all, nothing happens.
    pub fn checkout(&mut self, names: &[BranchName]) -> anyhow::Result<()> {
        for name in names {
            if !self.branches().contains(name) {
                let from = self.current_branch();
                let handle = self.renderer().create_branch(name, from)?;
                self.branches_mut().insert(name.clone(), handle);
            }
        }

        if let Some(last) = names.last() {
            let handle = self
                .branches()
                .get(last)
                .ok_or_else(|| anyhow::anyhow!("branch {} vanished from the table", last))?;
            self.set_current_branch(handle);
        }

        Ok(())
    }
}
