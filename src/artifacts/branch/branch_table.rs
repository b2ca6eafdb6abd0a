use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::render::BranchHandle;
use std::collections::HashMap;

/// Mapping from branch name to the handle the renderer issued for it.
///
/// One entry per name; re-checking out a known name never replaces its handle.
#[derive(Debug, Default)]
pub struct BranchTable {
    entries: HashMap<BranchName, BranchHandle>,
}

impl BranchTable {
    pub fn contains(&self, name: &BranchName) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &BranchName) -> Option<BranchHandle> {
        self.entries.get(name).copied()
    }

    /// Inserts a freshly created branch. Existing entries are kept untouched,
    /// the handle a renderer issued first stays authoritative for that name.
    pub fn insert(&mut self, name: BranchName, handle: BranchHandle) {
        self.entries.entry(name).or_insert(handle);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
