//! Theme ports — persisted storage and the visual surface.

use rickdex_domain::error::StorageError;
use rickdex_domain::theme::Theme;

/// Synchronous key-value store that outlives the session
/// (e.g. browser `localStorage`).
pub trait ThemeStore {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store is unreachable or rejects
    /// the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Something that can show a theme (the document root, a window, …).
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}
