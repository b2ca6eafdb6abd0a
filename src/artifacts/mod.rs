//! Script data structures and renderer-facing types
//!
//! - `branch`: branch names and the name → handle table
//! - `core`: shared utilities (pager wrapper)
//! - `render`: the renderer contract, its configuration, and the trace renderer
//! - `script`: script parsing (lines, commands, diagnostics)

pub mod branch;
pub mod core;
pub mod render;
pub mod script;
