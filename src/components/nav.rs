//! Navigation Component
//!
//! Header bar with brand, staff links, language switcher and theme toggle.

use leptos::*;
use leptos_router::*;

use crate::i18n::Lang;
use crate::state::global::GlobalState;
use crate::theme::{self, Theme};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/join" class="flex items-center space-x-3">
                        <span class="text-2xl">"🍃"</span>
                        <span class="text-xl font-bold text-white">"QueueLeaf"</span>
                    </A>

                    // Staff links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/dashboard" label_key="nav_dashboard" />
                        <NavLink href="/analytics" label_key="nav_analytics" />

                        <LangSelect />
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label_key: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {move || state.t(label_key)}
        </A>
    }
}

/// EN/UZ/RU selector, persisted to localStorage.
#[component]
fn LangSelect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <select
            on:change=move |ev| {
                if let Some(lang) = Lang::from_str(&event_target_value(&ev)) {
                    state.set_lang(lang);
                }
            }
            prop:value=move || state.lang.get().as_str()
            class="bg-gray-700 text-gray-300 rounded-lg px-2 py-1 text-sm
                   border border-gray-600 focus:outline-none"
        >
            {Lang::ALL.into_iter().map(|lang| view! {
                <option value=lang.as_str()>{lang.display_name()}</option>
            }).collect_view()}
        </select>
    }
}

/// Light/dark toggle button.
#[component]
fn ThemeToggle() -> impl IntoView {
    let (current, set_current) = create_signal(theme::initial_theme());

    view! {
        <button
            on:click=move |_| set_current.set(theme::toggle(current.get_untracked()))
            aria-pressed=move || (current.get() == Theme::Dark).to_string()
            class="px-3 py-1 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        >
            {move || if current.get() == Theme::Dark { "🌙" } else { "☀️" }}
        </button>
    }
}
