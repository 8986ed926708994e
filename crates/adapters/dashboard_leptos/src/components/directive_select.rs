//! Select controls for the sort and filter directives.

use leptos::prelude::*;
use rickdex_domain::directive::{FilterDirective, SortDirective};

/// Sort dropdown. The empty "Select a sorting option" entry is a disabled
/// placeholder, so once a sort is picked the user can only switch between
/// real sorts.
///
/// Selection is set on the `<option>`s themselves: a `prop:value` on the
/// `<select>` is applied before its children are mounted, and the browser
/// would then pick the first enabled option instead of the placeholder.
#[component]
pub fn SortSelect(
    /// Currently selected directive.
    #[prop(into)]
    value: Signal<SortDirective>,
    /// Called with the newly selected directive.
    #[prop(into)]
    on_change: Callback<SortDirective>,
) -> impl IntoView {
    let handle_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<SortDirective>() {
        Ok(directive) => on_change.run(directive),
        Err(err) => leptos::logging::warn!("{err}"),
    };

    view! {
        <select class="custom-dropdown" on:change=handle_change prop:value=move || value.get().as_value()>
            {SortDirective::ALL
                .into_iter()
                .map(|directive| {
                    view! {
                        <option
                            value=directive.as_value()
                            disabled=sort_option_disabled(directive)
                            selected=move || is_selected(value.get(), directive)
                        >
                            {directive.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Status filter dropdown.
#[component]
pub fn FilterSelect(
    /// Currently selected directive.
    #[prop(into)]
    value: Signal<FilterDirective>,
    /// Called with the newly selected directive.
    #[prop(into)]
    on_change: Callback<FilterDirective>,
) -> impl IntoView {
    let handle_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<FilterDirective>() {
        Ok(directive) => on_change.run(directive),
        Err(err) => leptos::logging::warn!("{err}"),
    };

    view! {
        <select class="custom-dropdown" on:change=handle_change prop:value=move || value.get().as_value()>
            {FilterDirective::ALL
                .into_iter()
                .map(|directive| {
                    view! {
                        <option value=directive.as_value() selected=move || is_selected(value.get(), directive)>
                            {directive.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

fn sort_option_disabled(directive: SortDirective) -> bool {
    directive == SortDirective::None
}

fn is_selected<T: PartialEq>(current: T, option: T) -> bool {
    current == option
}
