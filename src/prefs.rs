//! Difficulty preference storage
//!
//! The game persists a single string ("normal" or "hard") across runs. The
//! session writes through this trait fire-and-forget; a failed save never
//! interrupts play.

use std::fs;
use std::io;
use std::path::PathBuf;

/// A one-value string store surviving across sessions
pub trait PreferenceStore {
    /// Read the stored value, if any
    fn get(&self) -> Option<String>;

    /// Store a value
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the value cannot be written. Callers treat
    /// the write as fire-and-forget.
    fn set(&mut self, value: &str) -> io::Result<()>;
}

/// File-backed store: the raw value in a dot file
#[derive(Debug, Clone)]
pub struct FilePrefs {
    path: PathBuf,
}

impl FilePrefs {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the conventional location, `$HOME/.lingo_difficulty`
    ///
    /// Falls back to the current directory when `$HOME` is unset.
    #[must_use]
    pub fn at_home() -> Self {
        let base = std::env::var_os("HOME").map_or_else(PathBuf::new, PathBuf::from);
        Self::new(base.join(".lingo_difficulty"))
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn set(&mut self, value: &str) -> io::Result<()> {
        fs::write(&self.path, value)
    }
}

/// In-memory store for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    value: Option<String>,
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) -> io::Result<()> {
        self.value = Some(value.to_string());
        Ok(())
    }
}
