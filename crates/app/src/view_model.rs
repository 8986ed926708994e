//! View state — the single source of truth for what the browser shows.
//!
//! Every user or loader event produces a **new** [`ViewState`] through
//! [`ViewState::apply`]; nothing mutates a state in place. `apply` is also the
//! only place the displayed list is assigned, and it always assigns
//! [`recompute`] of the current inputs.

use rickdex_domain::character::CharacterRecord;
use rickdex_domain::directive::{FilterDirective, SortDirective};
use rickdex_domain::view::recompute;

/// Static message shown when the startup fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load characters";

/// Progress of the one-shot startup fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The fetch has not completed yet; nothing is listed.
    #[default]
    Loading,
    /// The source list is populated.
    Ready,
    /// The fetch failed; the message replaces the whole list view.
    Failed(&'static str),
}

/// Something that happened and may change the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The startup fetch succeeded with these records, in source order.
    Loaded(Vec<CharacterRecord>),
    /// The startup fetch failed.
    LoadFailed,
    /// The user picked a sort option.
    SortChanged(SortDirective),
    /// The user picked a filter option.
    FilterChanged(FilterDirective),
}

/// Immutable snapshot of the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    load: LoadState,
    source: Vec<CharacterRecord>,
    sort: SortDirective,
    filter: FilterDirective,
    displayed: Vec<CharacterRecord>,
}

impl ViewState {
    /// Initial state: loading, empty source, no sort, `All` filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this state and return the state after `event`.
    ///
    /// The source list is set at most once: a `Loaded` or `LoadFailed` that
    /// arrives after loading has finished is ignored.
    #[must_use]
    pub fn apply(mut self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::Loaded(records) => {
                if self.load != LoadState::Loading {
                    tracing::warn!(state = ?self.load, "ignoring late character load");
                    return self;
                }
                tracing::debug!(count = records.len(), "source list populated");
                self.source = records;
                self.load = LoadState::Ready;
            }
            ViewEvent::LoadFailed => {
                if self.load != LoadState::Loading {
                    tracing::warn!(state = ?self.load, "ignoring late load failure");
                    return self;
                }
                self.load = LoadState::Failed(LOAD_FAILED_MESSAGE);
            }
            ViewEvent::SortChanged(sort) => self.sort = sort,
            ViewEvent::FilterChanged(filter) => self.filter = filter,
        }
        self.displayed = recompute(&self.source, self.filter, self.sort);
        self
    }

    #[must_use]
    pub fn load(&self) -> LoadState {
        self.load
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// The failure message, when the startup fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        match self.load {
            LoadState::Failed(message) => Some(message),
            LoadState::Loading | LoadState::Ready => None,
        }
    }

    #[must_use]
    pub fn source(&self) -> &[CharacterRecord] {
        &self.source
    }

    #[must_use]
    pub fn sort(&self) -> SortDirective {
        self.sort
    }

    #[must_use]
    pub fn filter(&self) -> FilterDirective {
        self.filter
    }

    /// The filtered and sorted list to render.
    #[must_use]
    pub fn displayed(&self) -> &[CharacterRecord] {
        &self.displayed
    }
}
