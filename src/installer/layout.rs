//! Directory chain creation.

use std::path::{Path, PathBuf};

use super::error::InstallError;
use crate::output;

/// Create a nested directory chain beneath `root`, one segment at a time.
///
/// Each segment is created inside the previous one with `fs::create_dir`,
/// never `create_dir_all`: creation is strict, so an already-existing
/// segment (a re-run against the same target) or a missing `root` fails
/// with [`InstallError::CreateDirFailed`]. Segments created before the
/// failure are left in place.
///
/// Returns the deepest directory path.
pub fn build_chain(root: &Path, segments: &[String]) -> Result<PathBuf, InstallError> {
    let mut current = root.to_path_buf();
    for segment in segments {
        current.push(segment);
        output::detail(&format!("mkdir {}", current.display()));
        std::fs::create_dir(&current).map_err(|source| InstallError::CreateDirFailed {
            path: current.clone(),
            source,
        })?;
    }
    Ok(current)
}
