//! Parameters for shell file loading.

/// Default extension of the binary cache written next to a shell file.
pub const CACHE_EXTENSION: &str = "bshl";

/// Parameters for [`load_shell_with`](crate::load_shell_with).
///
/// # Example
///
/// ```
/// use shell_io::ShellIoParams;
///
/// let params = ShellIoParams::default();
/// assert!(params.use_cache);
///
/// let params = ShellIoParams::new().use_cache(false);
/// assert!(!params.use_cache);
/// ```
#[derive(Debug, Clone)]
pub struct ShellIoParams {
    /// Reuse the binary cache when it is newer than the shell file.
    pub use_cache: bool,

    /// Write (or refresh) the binary cache after parsing the text file.
    pub write_cache: bool,

    /// Extension of the cache file, without the leading dot.
    pub cache_extension: String,
}

impl Default for ShellIoParams {
    fn default() -> Self {
        Self {
            use_cache: true,
            write_cache: true,
            cache_extension: CACHE_EXTENSION.to_string(),
        }
    }
}

impl ShellIoParams {
    /// Create params with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reading from the cache.
    #[must_use]
    pub const fn use_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }

    /// Enable or disable writing the cache.
    #[must_use]
    pub const fn write_cache(mut self, enabled: bool) -> Self {
        self.write_cache = enabled;
        self
    }

    /// Set the cache file extension.
    #[must_use]
    pub fn cache_extension(mut self, extension: impl Into<String>) -> Self {
        self.cache_extension = extension.into();
        self
    }
}
