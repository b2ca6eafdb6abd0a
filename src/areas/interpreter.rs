use crate::artifacts::branch::branch_table::BranchTable;
use crate::artifacts::render::options::GraphOptions;
use crate::artifacts::render::{BranchHandle, Renderer};
use crate::artifacts::script::Script;
use crate::artifacts::script::command::Command;
use crate::areas::graph::RenderReport;

/// Execution state for one script run.
///
/// Everything lives on this struct and dies with it: two renders can never
/// see each other's branches or counter. Command handlers are spread across
/// `crate::commands`, one file per script command.
pub struct Interpreter<'a, R: Renderer> {
    options: &'a GraphOptions,
    renderer: &'a mut R,
    branches: BranchTable,
    current_branch: Option<BranchHandle>,
    commit_number: i64,
}

impl<'a, R: Renderer> Interpreter<'a, R> {
    pub fn new(options: &'a GraphOptions, renderer: &'a mut R) -> Self {
        Self {
            options,
            renderer,
            branches: BranchTable::default(),
            current_branch: None,
            commit_number: options.commit_number_base,
        }
    }

    /// Replays the script in order, strictly one command at a time.
    ///
    /// Parse diagnostics ride along into the report; the only errors that
    /// propagate from here are renderer failures.
    pub fn execute(mut self, script: &Script) -> anyhow::Result<RenderReport> {
        for line in script.lines() {
            match line.command() {
                Command::Checkout(names) => self.checkout(names)?,
                Command::Commit(subject) => self.commit(subject)?,
                Command::Merge(source) => self.merge(source.as_ref())?,
                Command::SetCommitNum(value) => self.set_commit_num(*value),
            }
        }

        Ok(RenderReport::new(
            script.diagnostics().to_vec(),
            self.commit_number,
        ))
    }

    pub(crate) fn options(&self) -> &GraphOptions {
        self.options
    }

    pub(crate) fn renderer(&mut self) -> &mut R {
        self.renderer
    }

    pub(crate) fn branches(&self) -> &BranchTable {
        &self.branches
    }

    pub(crate) fn branches_mut(&mut self) -> &mut BranchTable {
        &mut self.branches
    }

    pub(crate) fn current_branch(&self) -> Option<BranchHandle> {
        self.current_branch
    }

    pub(crate) fn set_current_branch(&mut self, handle: BranchHandle) {
        self.current_branch = Some(handle);
    }

    pub(crate) fn commit_number(&self) -> i64 {
        self.commit_number
    }

    pub(crate) fn set_commit_number(&mut self, value: i64) {
        self.commit_number = value;
    }

    pub(crate) fn bump_commit_number(&mut self) {
        self.commit_number += 1;
    }
}
