//! Script command implementations
//!
//! One file per script command, each an `impl` block on the interpreter,
//! mirroring how the script itself is organized:
//!
//! - `checkout`: ensure branches exist, move the current-branch pointer
//! - `commit`: commit onto the current branch, advance the counter
//! - `merge`: merge a named branch into the current one
//! - `set_commit_num`: overwrite the counter

mod checkout;
mod commit;
mod merge;
mod set_commit_num;
