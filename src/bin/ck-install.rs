//! ck-install CLI - installs the ck_wifi_helper component into ESP-IDF
//!
//! Usage:
//!   ck-install [IDF_PATH]          Install into the given ESP-IDF tree
//!
//! The destination can also come from the IDF_PATH environment variable;
//! with neither, the tool prompts for it on standard input (an empty line
//! selects ~/esp/esp-idf, Espressif's conventional checkout location).

use anyhow::{Context, Result};
use ck_install::{InstallTarget, Installer, component, output};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ck-install")]
#[command(about = "Install the CK Wifi Helper component into an ESP-IDF tree")]
#[command(version)]
struct Cli {
    /// Path to the ESP-IDF installation
    #[arg(value_name = "IDF_PATH", env = "IDF_PATH")]
    idf_path: Option<PathBuf>,

    /// Asset base directory holding the bundled include/ tree
    /// (defaults to one level above the installer's own directory)
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

/// Espressif's documented default checkout location
fn default_idf_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("esp/esp-idf")
}

/// The checkout root when installed in-tree: the bundled headers live in
/// a sibling include/ tree one level above the installer's directory.
fn default_source_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine the installer's own path")?;
    let exe_dir = exe
        .parent()
        .context("installer path has no parent directory")?;
    Ok(exe_dir.parent().unwrap_or(exe_dir).to_path_buf())
}

/// Prompt for the destination on standard input.
fn prompt_idf_path() -> Result<PathBuf> {
    print!("Where is your ESP-IDF installation? ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read destination path")?;

    let line = line.trim();
    if line.is_empty() {
        Ok(default_idf_path())
    } else {
        Ok(PathBuf::from(line))
    }
}

fn run(cli: Cli) -> Result<()> {
    output::info(&format!("ck-install {}", env!("CARGO_PKG_VERSION")));

    let idf_path = match cli.idf_path {
        Some(path) => path,
        None => prompt_idf_path()?,
    };
    let source_root = match cli.source_dir {
        Some(dir) => dir,
        None => default_source_root()?,
    };

    let spec = component::ck_wifi_helper();
    output::action(&format!(
        "Installing {} into {}",
        spec.name,
        idf_path.display()
    ));

    let target = InstallTarget::validate(idf_path)?;
    let installer = Installer::new(target, source_root);
    let installed = installer.install(&spec)?;

    output::success(&format!(
        "{} installed ({} header(s))",
        spec.name,
        installed.len()
    ));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
