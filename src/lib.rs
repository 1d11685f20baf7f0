//! audiofeat library
//!
//! Collects Spotify audio features for the album tracks of a list of artists
//! and joins them into one flat table. The catalog lookups are plain
//! sequential HTTP calls; bulk lookups are split into fixed-size batches by
//! [`batch::partition`].
//!
//! # Modules
//!
//! - `batch` - Fixed-capacity partitioning of id collections
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Collection pipeline and feature table cache
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Filtering, deduplication and table helpers
//!
//! # Example
//!
//! ```
//! use audiofeat::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> audiofeat::Res<()> {
//!     config::load_env().await?;
//!     cli::list_features(None, None).await;
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used by application flows.
///
/// Boxed errors keep `Send + Sync` so they can cross `.await` points.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// ```
/// info!("Resolving artists...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with code 1.
///
/// Only for unrecoverable errors in the CLI layer; code after it never runs.
///
/// ```
/// error!("Failed to obtain access token: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`.
///
/// Used for per-item failures that do not stop a run.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
