//! Installer error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while materializing the install layout.
///
/// All of these are terminal: the installer stops at the first one and
/// performs no cleanup of directories or files it already created.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("path is a file, not a directory: {0}")]
    PathIsFile(PathBuf),

    #[error("cannot create directory {path}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("header not found: {0}")]
    HeaderMissing(PathBuf),

    #[error("cannot copy {src} to {dest}: {source}")]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },
}
