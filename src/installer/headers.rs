//! Header copying.

use std::path::{Path, PathBuf};

use super::error::InstallError;
use crate::component::HeaderFile;
use crate::output;

/// Copy each bundled header into `dest_dir`, in list order.
///
/// For each header the source path is `source_root` joined with the
/// header's relative source path. A missing source fails with
/// [`InstallError::HeaderMissing`] before any copy of that header is
/// attempted; a failing copy fails with [`InstallError::CopyFailed`].
/// Processing stops at the first failure and headers already copied are
/// left in place. An existing destination file is overwritten.
///
/// Returns the destination paths of the installed headers.
pub fn copy_all(
    dest_dir: &Path,
    source_root: &Path,
    headers: &[HeaderFile],
) -> Result<Vec<PathBuf>, InstallError> {
    let mut installed = Vec::new();
    for header in headers {
        let src = source_root.join(&header.source);
        if !src.exists() {
            return Err(InstallError::HeaderMissing(src));
        }

        let dest = dest_dir.join(&header.dest);
        output::detail(&format!("install {} -> {}", src.display(), dest.display()));
        std::fs::copy(&src, &dest).map_err(|source| InstallError::CopyFailed {
            src: src.clone(),
            dest: dest.clone(),
            source,
        })?;
        installed.push(dest);
    }
    Ok(installed)
}
