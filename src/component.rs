//! Component specification - the static description of what gets installed.
//!
//! A component is a name, a nested directory chain beneath the target's
//! `components/` directory, and the bundled header files to copy into the
//! deepest directory of that chain. The list is fixed at compile time; the
//! installer takes it as a value so tests can feed it arbitrary specs.

use std::path::PathBuf;

/// A single ESP-IDF component to install.
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    pub name: String,
    /// Directory chain created beneath `<target>/components`, in order.
    /// Each entry is created inside the previous one.
    pub dirs: Vec<String>,
    pub headers: Vec<HeaderFile>,
}

/// A bundled header file.
#[derive(Debug, Clone)]
pub struct HeaderFile {
    /// Source path relative to the asset base directory.
    pub source: PathBuf,
    /// Destination filename inside the deepest chain directory.
    pub dest: String,
}

impl HeaderFile {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// The CK Wifi Helper component: `components/ck_wifi_helper/include/
/// ck_wifi_helper/wifi.h`, sourced from the checkout's own `include/` tree.
pub fn ck_wifi_helper() -> ComponentSpec {
    ComponentSpec {
        name: "ck_wifi_helper".to_string(),
        dirs: vec![
            "ck_wifi_helper".to_string(),
            "include".to_string(),
            "ck_wifi_helper".to_string(),
        ],
        headers: vec![HeaderFile::new("include/ck_wifi_helper/wifi.h", "wifi.h")],
    }
}
