//! Binary parse cache stored next to a shell file.
//!
//! # File Format
//!
//! 1. **Magic bytes**: `BSHL` (4 bytes)
//! 2. **Version**: `u32` little-endian (4 bytes), currently 1
//! 3. **Payload**: bincode-encoded [`ShellMesh`]
//!
//! A cache is fresh when its modification time is strictly later than the
//! source file's. Concurrent writers are not coordinated; the last writer
//! wins and a torn cache is rejected on read.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use shell_types::ShellMesh;

use crate::error::{IoError, IoResult};

/// Magic bytes identifying a shell cache.
pub const CACHE_MAGIC: [u8; 4] = *b"BSHL";

/// Current cache format version.
pub const CACHE_VERSION: u32 = 1;

/// Cache path for a shell file: same basename, `extension` replaced.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use shell_io::cache_path;
///
/// assert_eq!(cache_path(Path::new("geo/tooth.shl"), "bshl"), Path::new("geo/tooth.bshl"));
/// ```
#[must_use]
pub fn cache_path(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}

/// True when `cache` exists and was modified after `source`.
///
/// Any metadata failure counts as stale.
#[must_use]
pub fn cache_is_fresh(source: &Path, cache: &Path) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(source), modified(cache)) {
        (Some(src), Some(cached)) => src < cached,
        _ => false,
    }
}

/// Serialize a shell to a writer in cache format.
///
/// # Errors
///
/// Returns [`IoError::CacheSerialize`] if writing or encoding fails.
pub fn write_cache_to<W: Write>(shell: &ShellMesh, writer: &mut W) -> IoResult<()> {
    writer
        .write_all(&CACHE_MAGIC)
        .and_then(|()| writer.write_all(&CACHE_VERSION.to_le_bytes()))
        .map_err(|e| IoError::CacheSerialize(e.to_string()))?;
    bincode::serialize_into(writer, shell).map_err(|e| IoError::CacheSerialize(e.to_string()))
}

/// Deserialize a shell from a reader in cache format.
///
/// # Errors
///
/// Returns [`IoError::InvalidCache`] for a wrong magic or version, and
/// [`IoError::CacheSerialize`] if the payload cannot be decoded.
pub fn read_cache_from<R: Read>(reader: &mut R) -> IoResult<ShellMesh> {
    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .map_err(|e| IoError::InvalidCache(format!("truncated header: {e}")))?;
    if magic != CACHE_MAGIC {
        return Err(IoError::InvalidCache(format!("bad magic {magic:?}")));
    }

    let mut version = [0u8; 4];
    reader
        .read_exact(&mut version)
        .map_err(|e| IoError::InvalidCache(format!("truncated header: {e}")))?;
    let version = u32::from_le_bytes(version);
    if version != CACHE_VERSION {
        return Err(IoError::InvalidCache(format!(
            "unsupported version {version}"
        )));
    }

    bincode::deserialize_from(reader).map_err(|e| IoError::CacheSerialize(e.to_string()))
}

/// Write a shell cache file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn write_cache(shell: &ShellMesh, path: &Path) -> IoResult<()> {
    let file = File::create(path).map_err(|e| IoError::on_write(path, e))?;
    let mut writer = BufWriter::new(file);
    write_cache_to(shell, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a shell cache file.
///
/// The cached shell is checked with [`ShellMesh::validate`] so a cache
/// holding out-of-range indices is rejected.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not a valid cache, or
/// holds an invalid shell.
pub fn read_cache(path: &Path) -> IoResult<ShellMesh> {
    let file = File::open(path).map_err(|e| IoError::on_read(path, e))?;
    let mut reader = BufReader::new(file);
    let shell = read_cache_from(&mut reader)?;
    shell.validate()?;
    Ok(shell)
}
