//! Static dashboard bundle on disk.

use std::path::{Path, PathBuf};

use tower_http::services::{ServeDir, ServeFile};

/// Entry document every unknown path falls back to.
pub const INDEX_FILE: &str = "index.html";

/// Errors raised while locating the dashboard bundle.
#[derive(Debug, thiserror::Error)]
pub enum AssetsError {
    /// The configured directory does not exist or is not a directory.
    #[error("assets directory {0} not found")]
    MissingDir(PathBuf),

    /// The directory exists but has no `index.html`.
    #[error("assets directory {0} has no index.html")]
    MissingIndex(PathBuf),
}

/// A validated directory holding the compiled dashboard.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    dir: PathBuf,
}

impl StaticAssets {
    /// Check that `dir` exists and contains an `index.html`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetsError::MissingDir`] or [`AssetsError::MissingIndex`].
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AssetsError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(AssetsError::MissingDir(dir));
        }
        if !dir.join(INDEX_FILE).is_file() {
            return Err(AssetsError::MissingIndex(dir));
        }
        tracing::debug!(dir = %dir.display(), "dashboard assets located");
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File service for the bundle, answering unknown paths with `index.html`
    /// and a `200` status.
    #[must_use]
    pub fn service(&self) -> ServeDir<ServeFile> {
        ServeDir::new(&self.dir)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(self.dir.join(INDEX_FILE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dist")
    }

    #[test]
    fn should_open_directory_with_index() {
        let assets = StaticAssets::open(fixture_dir()).unwrap();
        assert_eq!(assets.dir(), fixture_dir());
    }

    #[test]
    fn should_reject_missing_directory() {
        let result = StaticAssets::open(fixture_dir().join("nope"));
        assert!(matches!(result, Err(AssetsError::MissingDir(_))));
    }

    #[test]
    fn should_reject_directory_without_index() {
        let result = StaticAssets::open(Path::new(env!("CARGO_MANIFEST_DIR")).join("src"));
        assert!(matches!(result, Err(AssetsError::MissingIndex(_))));
    }

    #[test]
    fn should_name_directory_in_error_message() {
        let err = AssetsError::MissingDir(PathBuf::from("/srv/dist"));
        assert_eq!(err.to_string(), "assets directory /srv/dist not found");
    }
}
