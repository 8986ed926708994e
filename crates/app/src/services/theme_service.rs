//! Theme service — read, toggle and persist the light/dark preference.

use rickdex_domain::theme::{THEME_KEY, Theme};

use crate::ports::{ThemeStore, ThemeSurface};

/// Application service owning the persisted theme flag.
///
/// Every change is written to the store *and* applied to the surface. A store
/// failure is logged and otherwise ignored: the theme still switches for the
/// current session.
pub struct ThemeService<S, U> {
    store: S,
    surface: U,
}

impl<S: ThemeStore, U: ThemeSurface> ThemeService<S, U> {
    /// Create a new service backed by the given store and surface.
    pub fn new(store: S, surface: U) -> Self {
        Self { store, surface }
    }

    /// Read the persisted theme (light when absent or unreadable), write the
    /// normalised tag back, apply it, and return it.
    pub fn initial(&self) -> Theme {
        let tag = self.store.get(THEME_KEY).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "theme store unreadable, defaulting to light");
            None
        });
        let theme = Theme::from_tag(tag.as_deref());
        self.set(theme);
        theme
    }

    /// Switch away from `current`, persist and apply the result, and return it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.set(next);
        next
    }

    /// Persist and apply an explicit theme.
    pub fn set(&self, theme: Theme) {
        match self.store.set(THEME_KEY, theme.as_tag()) {
            Ok(()) => tracing::debug!(%theme, "theme persisted"),
            Err(err) => tracing::warn!(error = %err, %theme, "failed to persist theme"),
        }
        self.surface.apply(theme);
    }
}
