//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::i18n::Lang;
use crate::session;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Active UI language
    pub lang: RwSignal<Lang>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let lang = session::lang()
        .and_then(|code| Lang::from_str(&code))
        .unwrap_or_default();

    let state = GlobalState {
        lang: create_rw_signal(lang),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Translate a key in the active language.
    pub fn t(&self, key: &'static str) -> &'static str {
        crate::i18n::t(self.lang.get(), key)
    }

    /// Switch language and persist the choice.
    pub fn set_lang(&self, lang: Lang) {
        self.lang.set(lang);
        session::set_lang(lang.as_str());
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", lang.as_str());
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
