//! Responsive grid of character cards.

use leptos::prelude::*;
use rickdex_domain::character::CharacterRecord;

use super::CharacterCard;

/// Keyed grid of [`CharacterCard`]s, or a notice when the list is empty.
#[component]
pub fn CharacterGrid(
    /// The displayed list, already filtered and sorted.
    #[prop(into)]
    characters: Signal<Vec<CharacterRecord>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || characters.with(|list| !list.is_empty())
            fallback=|| view! { <p>"No characters found"</p> }
        >
            <div class="character-grid">
                <For
                    each=move || characters.get()
                    key=|record: &CharacterRecord| record.id
                    children=|record: CharacterRecord| view! { <CharacterCard record/> }
                />
            </div>
        </Show>
    }
}
