//! Shell file I/O for wearkit.
//!
//! Reads and writes the `.shl` text format and keeps a binary cache of the
//! parsed geometry next to each source file.
//!
//! - [`load_shell`] / [`load_shell_with`] - Read a file, reusing the cache when fresh
//! - [`save_shell`] - Write a file (points are deduplicated first)
//! - [`parse_shell`] / [`format_shell`] - In-memory text conversion
//!
//! # Example
//!
//! ```no_run
//! use shell_io::{load_shell_with, save_shell, ShellIoParams};
//! use shell_types::box_shell;
//!
//! save_shell(&box_shell(2.0, 2.0, 2.0), "cube.shl", 1.0).unwrap();
//!
//! let params = ShellIoParams::new().use_cache(false);
//! let cube = load_shell_with("cube.shl", &params).unwrap();
//! assert_eq!(cube.point_count(), 8);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cache;
mod error;
mod load;
mod params;
mod shl;

pub use cache::{
    cache_is_fresh, cache_path, read_cache, read_cache_from, write_cache, write_cache_to,
    CACHE_MAGIC, CACHE_VERSION,
};
pub use error::{IoError, IoResult};
pub use load::{load_shell, load_shell_with};
pub use params::{ShellIoParams, CACHE_EXTENSION};
pub use shl::{format_shell, parse_shell, save_shell, ShellFile};
