//! Install layout materializer.
//!
//! Validates the destination, builds the component directory chain, and
//! copies the bundled headers, in that order, short-circuiting on the
//! first failure.

mod error;
pub mod headers;
pub mod layout;
mod target;

pub use error::InstallError;
pub use target::InstallTarget;

use std::path::PathBuf;

use crate::component::ComponentSpec;
use crate::output;

/// Runs the install flow against a validated target.
pub struct Installer {
    target: InstallTarget,
    /// Asset base directory: the CK Wifi Helper checkout root containing
    /// the bundled `include/` tree.
    source_root: PathBuf,
}

impl Installer {
    pub fn new(target: InstallTarget, source_root: impl Into<PathBuf>) -> Self {
        Self {
            target,
            source_root: source_root.into(),
        }
    }

    /// Install one component: create its directory chain beneath
    /// `<target>/components`, then copy its headers into the deepest
    /// directory. Returns the installed header paths.
    ///
    /// No stage is retried and no partial state is cleaned up on failure.
    /// Directory creation is strict, so installing the same component
    /// twice fails with [`InstallError::CreateDirFailed`] on the second
    /// run, leaving the first run's files unchanged.
    pub fn install(&self, component: &ComponentSpec) -> Result<Vec<PathBuf>, InstallError> {
        let chain_root = self.target.path().join("components");

        output::sub_action("create directory chain");
        let dest_dir = layout::build_chain(&chain_root, &component.dirs)?;

        output::sub_action("install headers");
        headers::copy_all(&dest_dir, &self.source_root, &component.headers)
    }
}
