//! Character card component.

use leptos::prelude::*;
use rickdex_domain::card;
use rickdex_domain::character::CharacterRecord;

/// A card showing one character's portrait, name, creation date, gender and
/// status. All text comes pre-formatted from [`card::CharacterCard`].
#[component]
pub fn CharacterCard(
    /// The character to display.
    record: CharacterRecord,
) -> impl IntoView {
    let card::CharacterCard {
        image,
        name,
        created_label,
        gender_label,
        status_label,
        status_class,
        ..
    } = card::CharacterCard::from(&record);
    let alt = name.clone();

    view! {
        <div class="character-card">
            <img src=image alt=alt class="character-image" loading="lazy"/>
            <h2 class="character-name">{name}</h2>
            <p class="character-date">{created_label}</p>
            <div class="character-details">
                <p class="character-gender-status">{gender_label}</p>
                <p class=format!("character-gender-status {status_class}")>
                    {status_label}
                </p>
            </div>
        </div>
    }
}
