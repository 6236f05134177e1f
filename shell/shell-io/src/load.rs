//! File-level loading with cache reuse.

use std::fs;
use std::path::Path;

use shell_types::ShellMesh;
use tracing::{debug, info, warn};

use crate::cache::{cache_is_fresh, cache_path, read_cache, write_cache};
use crate::error::{IoError, IoResult};
use crate::params::ShellIoParams;
use crate::shl::parse_shell;

/// Load a shell file with default parameters.
///
/// # Errors
///
/// See [`load_shell_with`].
///
/// # Example
///
/// ```no_run
/// use shell_io::load_shell;
///
/// let shell = load_shell("geometry/cup.shl").unwrap();
/// println!("{} points", shell.point_count());
/// ```
pub fn load_shell<P: AsRef<Path>>(path: P) -> IoResult<ShellMesh> {
    load_shell_with(path, &ShellIoParams::default())
}

/// Load a shell file, reusing or refreshing the binary cache.
///
/// When `params.use_cache` is set and the cache is newer than the source,
/// the cache is returned directly. A cache that fails to decode is logged
/// and the text file is parsed instead. After parsing, the cache is
/// rewritten when `params.write_cache` is set; a failure to write it is
/// logged and otherwise ignored.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the shell file does not exist and
/// [`IoError::Unparseable`] if the text matches neither grammar.
pub fn load_shell_with<P: AsRef<Path>>(path: P, params: &ShellIoParams) -> IoResult<ShellMesh> {
    let path = path.as_ref();
    let cache = cache_path(path, &params.cache_extension);

    if params.use_cache && cache_is_fresh(path, &cache) {
        match read_cache(&cache) {
            Ok(shell) => {
                debug!(path = %path.display(), points = shell.point_count(), "Shell cache hit");
                return Ok(shell);
            }
            Err(e) => warn!(cache = %cache.display(), error = %e, "Discarding unreadable shell cache"),
        }
    }

    let text = fs::read_to_string(path).map_err(|e| IoError::on_read(path, e))?;
    let shell = parse_shell(&text)?.shell;
    info!(
        path = %path.display(),
        points = shell.point_count(),
        facets = shell.facet_count(),
        "Parsed shell file"
    );

    if params.write_cache {
        match write_cache(&shell, &cache) {
            Ok(()) => debug!(cache = %cache.display(), "Wrote shell cache"),
            Err(e) => warn!(cache = %cache.display(), error = %e, "Could not write shell cache"),
        }
    }

    Ok(shell)
}
