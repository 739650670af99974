//! Write-then-rename file replacement.

use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::OutputResult;

/// Render into a temporary file next to `path`, then rename it over `path`.
///
/// `render` receives a buffered writer.  If it (or the flush) fails, the
/// temporary file is deleted on drop and `path` is left as it was.
pub fn write_atomic<F>(path: &Path, render: F) -> OutputResult<()>
where
    F: FnOnce(&mut dyn Write) -> OutputResult<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut buf = BufWriter::new(tmp.as_file_mut());
        render(&mut buf)?;
        buf.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    debug!("wrote {}", path.display());
    Ok(())
}
