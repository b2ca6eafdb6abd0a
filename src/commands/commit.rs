use crate::areas::interpreter::Interpreter;
use crate::artifacts::render::{CommitSpec, Renderer};

impl<R: Renderer> Interpreter<'_, R> {
    /// Commits onto the current branch, if there is one.
    ///
    /// The counter advances even without a current branch, so a script that
    /// commits before its first checkout sees its `C<n>` labels drift from
    /// the number of dots actually drawn.
    pub fn commit(&mut self, subject: &str) -> anyhow::Result<()> {
        if let Some(branch) = self.current_branch() {
            let dot_text = self
                .options()
                .show_commit_number
                .then(|| format!("C{}", self.commit_number()));

            self.renderer()
                .commit(branch, CommitSpec::new(subject.to_string(), dot_text))?;
        }

        self.bump_commit_number();
        Ok(())
    }
}
