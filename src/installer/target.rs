//! Install target validation.

use std::path::{Path, PathBuf};

use super::error::InstallError;

/// A validated ESP-IDF installation root.
///
/// The only constructor is [`InstallTarget::validate`], so holding one means
/// the path existed and was a directory at validation time. The target is
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct InstallTarget(PathBuf);

impl InstallTarget {
    /// Check that `path` exists and is a directory.
    ///
    /// Read-only: performs no filesystem mutations, on success or failure.
    /// Symlinks are followed, so a symlink to a directory is accepted.
    pub fn validate(path: impl Into<PathBuf>) -> Result<Self, InstallError> {
        let path = path.into();
        if !path.exists() {
            return Err(InstallError::PathNotFound(path));
        }
        if path.is_file() {
            return Err(InstallError::PathIsFile(path));
        }
        Ok(Self(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
