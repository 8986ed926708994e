//! Character loader — the single startup fetch.

use crate::ports::CharacterSource;
use crate::view_model::ViewEvent;

/// Performs the one read of the character source for a session.
///
/// [`load`](Self::load) consumes the loader, so a session cannot fetch twice.
/// There is no retry and no timeout.
pub struct CharacterLoader<S> {
    source: S,
}

impl<S: CharacterSource> CharacterLoader<S> {
    /// Create a loader backed by the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the listing and turn the outcome into a [`ViewEvent`].
    ///
    /// Success yields [`ViewEvent::Loaded`] with the records in source order.
    /// Any failure yields [`ViewEvent::LoadFailed`]; the cause is logged but
    /// never shown.
    pub async fn load(self) -> ViewEvent {
        match self.source.fetch_page().await {
            Ok(page) => {
                tracing::info!(
                    received = page.results.len(),
                    total = page.info.count,
                    pages = page.info.pages,
                    "characters loaded"
                );
                ViewEvent::Loaded(page.results)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load characters");
                ViewEvent::LoadFailed
            }
        }
    }
}
