//! # CLI Module
//!
//! User-facing commands of audiofeat. Each command delegates to the
//! management and spotify layers and handles progress feedback and error
//! presentation.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (collection pipeline, table cache)
//!     ↓
//! Spotify Integration Layer
//! ```
//!
//! ## Commands
//!
//! - [`collect_features`] - Resolves artists and collects audio features of their album tracks
//! - [`list_features`] - Shows the cached feature table with optional filtering and sorting
//!
//! ## Usage
//!
//! ```bash
//! audiofeat collect --artist "Radiohead" --artist "Portishead"
//! audiofeat collect --artist "Nirvana" --exclude-album "MTV Unplugged In New York"
//! audiofeat table --search radiohead --sort tempo
//! ```

mod collect;
mod table;

pub use collect::collect_features;
pub use table::list_features;
