//! ESP-IDF component installer for the CK Wifi Helper library
//!
//! Installs the `ck_wifi_helper` component into an ESP-IDF installation's
//! `components/` tree: validates the destination, creates the nested
//! component directory chain, and copies the bundled headers into place.
//!
//! The flow is three stages, each run exactly once, in fixed order:
//!
//! 1. [`InstallTarget::validate`] - the destination must exist and be a
//!    directory
//! 2. `layout::build_chain` - create each directory of the chain beneath
//!    `<target>/components`, strictly (never "create if absent")
//! 3. `headers::copy_all` - check each bundled header exists, then copy it
//!    into the deepest created directory
//!
//! Every failure is terminal. Nothing is retried and nothing is rolled back;
//! directories and files created before the failure remain on disk. A second
//! run against the same target therefore fails while creating the first
//! chain directory, which already exists.

pub mod component;
pub mod installer;
pub mod output;

pub use installer::{InstallError, InstallTarget, Installer};
