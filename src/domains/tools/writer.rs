//! Artifact writer shared by the tools.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::ToolError;

/// Create (or truncate) `path` and write `contents` into it.
///
/// Parent directories are never created. Failures are split into create
/// and write errors so callers can report which step went wrong.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ToolError> {
    let mut file = File::create(path).map_err(ToolError::CreateFailed)?;
    file.write_all(contents.as_bytes())
        .map_err(ToolError::WriteFailed)?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
