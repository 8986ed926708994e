//! Character source port — the remote, read-only character listing.

use std::future::Future;

use rickdex_domain::character::CharacterPage;
use rickdex_domain::error::SourceError;

/// Read access to the character listing.
///
/// The returned future carries no `Send` bound: the browser adapter drives it
/// from a single-threaded WASM executor.
pub trait CharacterSource {
    /// Fetch the listing once. Transport failures, non-success statuses and
    /// undecodable bodies all surface as a [`SourceError`].
    fn fetch_page(&self) -> impl Future<Output = Result<CharacterPage, SourceError>>;
}
