//! Character browser page: header with theme switch, sort and filter
//! controls, and the card grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rickdex_app::services::loader::CharacterLoader;
use rickdex_app::services::theme_service::ThemeService;
use rickdex_app::view_model::{LoadState, ViewEvent, ViewState};
use rickdex_domain::directive::{FilterDirective, SortDirective};

use crate::api::HttpCharacterSource;
use crate::components::{CharacterGrid, FilterSelect, Loading, SortSelect, ThemeSwitch};
use crate::theme::{DocumentThemeSurface, LocalStorageThemeStore};

/// Replace the view state with the state after `event`.
fn dispatch(state: RwSignal<ViewState>, event: ViewEvent) {
    state.update(|current| *current = std::mem::take(current).apply(event));
}

/// The single page of the dashboard.
///
/// The theme is read and applied as soon as the page mounts, before the
/// character fetch completes. The fetch itself runs once; until it resolves
/// only a loading indicator is shown, and a failure replaces the whole page
/// with a static message.
#[component]
pub fn Characters() -> impl IntoView {
    let themes = ThemeService::new(LocalStorageThemeStore, DocumentThemeSurface);
    let theme = RwSignal::new(themes.initial());
    let toggle_theme = Callback::new(move |()| {
        theme.set(themes.toggle(theme.get_untracked()));
    });

    let state = RwSignal::new(ViewState::new());
    spawn_local(async move {
        let event = CharacterLoader::new(HttpCharacterSource::default())
            .load()
            .await;
        dispatch(state, event);
    });

    let phase = Memo::new(move |_| state.with(ViewState::load));
    let sort = Signal::derive(move || state.with(ViewState::sort));
    let filter = Signal::derive(move || state.with(ViewState::filter));
    let displayed = Memo::new(move |_| state.with(|s| s.displayed().to_vec()));

    let on_sort = Callback::new(move |directive: SortDirective| {
        dispatch(state, ViewEvent::SortChanged(directive));
    });
    let on_filter = Callback::new(move |directive: FilterDirective| {
        dispatch(state, ViewEvent::FilterChanged(directive));
    });

    move || match phase.get() {
        LoadState::Loading => view! { <Loading/> }.into_any(),
        LoadState::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
        LoadState::Ready => view! {
            <div class="app">
                <header>
                    <h1>"Rick and Morty Characters"</h1>
                    <ThemeSwitch theme on_toggle=toggle_theme/>
                </header>
                <div class="dropdown-container">
                    <SortSelect value=sort on_change=on_sort/>
                    <FilterSelect value=filter on_change=on_filter/>
                </div>
                <CharacterGrid characters=displayed/>
            </div>
        }
        .into_any(),
    }
}
