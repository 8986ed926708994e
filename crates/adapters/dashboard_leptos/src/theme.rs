//! Browser theme adapters: `localStorage` persistence and the `<html>`
//! `data-theme` attribute.

use rickdex_app::ports::{ThemeStore, ThemeSurface};
use rickdex_domain::error::StorageError;
use rickdex_domain::theme::Theme;
use wasm_bindgen::JsCast;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// [`ThemeStore`] backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageThemeStore;

impl ThemeStore for LocalStorageThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

/// [`ThemeSurface`] that sets `data-theme` on the document element, which
/// the stylesheet keys its palette on.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentThemeSurface;

impl ThemeSurface for DocumentThemeSurface {
    fn apply(&self, theme: Theme) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let html = el.unchecked_into::<web_sys::HtmlElement>();
                if html.dataset().set("theme", theme.as_tag()).is_err() {
                    leptos::logging::warn!("failed to set data-theme={theme}");
                }
            }
        }
    }
}
