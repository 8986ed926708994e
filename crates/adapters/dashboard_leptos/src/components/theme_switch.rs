//! Dark-mode switch with a moon icon.

use leptos::prelude::*;
use rickdex_domain::theme::Theme;

/// A labelled switch that is on while the dark theme is active.
#[component]
pub fn ThemeSwitch(
    /// Currently active theme.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Called when the user flips the switch.
    #[prop(into)]
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="theme-switch" title="Toggle dark mode">
            <MoonIcon/>
            <input
                type="checkbox"
                role="switch"
                aria-label="Dark mode"
                prop:checked=move || theme.get().is_dark()
                on:change=move |_| on_toggle.run(())
            />
        </label>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d="M12 3a9 9 0 1 0 9 9c0-.46-.04-.92-.1-1.36a5.389 5.389 0 0 1-4.4 2.26 5.403 5.403 0 0 1-3.14-9.8c-.44-.06-.9-.1-1.36-.1z"></path>
        </svg>
    }
}
