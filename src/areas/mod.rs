//! Coordination layer
//!
//! - `graph`: the public entry point tying options, script, and renderer together
//! - `interpreter`: per-run execution state (branch table, current branch, counter)

pub mod graph;
pub mod interpreter;
