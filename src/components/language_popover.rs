//! Language Popover Component
//!
//! Flag button with a menu of interface languages.

use leptos::prelude::*;

/// A selectable interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        value: "pt-BR",
        label: "Português (BR)",
        icon: "https://cdn.jsdelivr.net/gh/circle-flags/circle-flags/flags/br.svg",
    },
    Language {
        value: "en",
        label: "English",
        icon: "https://cdn.jsdelivr.net/gh/circle-flags/circle-flags/flags/gb.svg",
    },
    Language {
        value: "es",
        label: "Spanish",
        icon: "https://cdn.jsdelivr.net/gh/circle-flags/circle-flags/flags/es.svg",
    },
];

/// Look up a language by its locale tag
pub fn find_language(value: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.value == value)
}

#[component]
pub fn LanguagePopover(locale: RwSignal<&'static str>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let current = move || find_language(locale.get()).or(LANGUAGES.first());

    let flag = |lang: Option<&'static Language>| {
        lang.map(|lang| view! { <img class="lang-flag" src=lang.icon alt=lang.label /> })
    };

    view! {
        <div class="lang-popover">
            <button
                class="lang-btn"
                class:active=move || open.get()
                aria-label="Languages button"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || flag(current())}
            </button>
            <Show when=move || open.get()>
                <ul class="lang-menu">
                    {LANGUAGES.iter().map(|lang| {
                        let value = lang.value;
                        view! {
                            <li
                                class=move || if locale.get() == value { "lang-item selected" } else { "lang-item" }
                                on:click=move |_| {
                                    log::info!("[LanguagePopover] Locale changed to {}", value);
                                    locale.set(value);
                                    set_open.set(false);
                                }
                            >
                                {flag(Some(lang))}
                                {lang.label}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
