//! Top Tracks CLI Library
//!
//! This library builds a ranked, deduplicated playlist of an artist's tracks from
//! the Spotify catalog. Tracks are ordered by an age-adjusted popularity score so
//! long-lived classics can outrank this week's spike.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `catalog` - Capability traits for the remote catalog and playlist publisher
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Crate error type
//! - `management` - Token persistence and refresh
//! - `pipeline` - Release/track collection, scoring and selection
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod pipeline;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// Result alias used throughout the crate.
///
/// Every fallible operation reports a crate [`Error`], so callers can tell an
/// unknown artist or an empty catalog apart from an upstream HTTP failure.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints a progress line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Searching for artist '{}'...", artist);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green checkmark.
///
/// ```
/// success!("Playlist '{}' is ready", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and terminates the process with exit code 1.
///
/// Reserved for failures the command cannot continue from, such as a missing
/// token or an upstream request that failed mid-run.
///
/// ```
/// error!("Failed to load token. Please run toptracks auth\n Error: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line without exiting.
///
/// Used for terminal-but-expected outcomes like an unknown artist, and for
/// recoverable problems such as a browser that could not be opened.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
