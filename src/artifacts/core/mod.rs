//! Shared utilities

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter for the minus pager.
///
/// Lets the trace writer target the pager the same way it targets stdout, so
/// the render subcommand can page long traces without a second code path.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
