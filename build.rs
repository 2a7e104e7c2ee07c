//! Build script for the toptracks CLI.
//!
//! Copies the `.env.example` template into the user's local data directory so the
//! configuration example sits next to the `.env` file the binary loads at startup.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the toptracks data directory.
///
/// # Destination
///
/// - Linux: `~/.local/share/toptracks/.env.example`
/// - macOS: `~/Library/Application Support/toptracks/.env.example`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env.example`
///
/// A missing template only produces a cargo warning. Failing to create the
/// directory or write the file aborts the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("toptracks");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        let contents = fs::read_to_string(&template)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
