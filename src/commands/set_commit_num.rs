use crate::areas::interpreter::Interpreter;
use crate::artifacts::render::Renderer;

impl<R: Renderer> Interpreter<'_, R> {
    /// Overwrites the commit counter. No renderer call.
    ///
    /// The argument was already validated at parse time; a malformed integer
    /// never reaches this handler.
    pub fn set_commit_num(&mut self, value: i64) {
        self.set_commit_number(value);
    }
}
