//! Called-State Alerts
//!
//! Sound, vibration and desktop notification side effects fired when a ticket
//! transitions into `called`. Browsers require a user gesture before these
//! APIs may be used, so each channel is gated behind an explicit opt-in
//! button; `fire` only touches channels the user enabled.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, Notification, NotificationOptions, NotificationPermission};

/// Chime played on the called transition; served from the static shell.
const CHIME_SRC: &str = "/assets/chime.mp3";

const NOTIFICATION_TITLE: &str = "QueueLeaf";

/// Per-channel opt-in flags plus the pre-loaded audio element.
#[derive(Clone)]
pub struct AlertGates {
    pub sound: RwSignal<bool>,
    pub vibration: RwSignal<bool>,
    pub notifications: RwSignal<bool>,
    audio: Rc<RefCell<Option<HtmlAudioElement>>>,
}

impl Default for AlertGates {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertGates {
    pub fn new() -> Self {
        Self {
            sound: create_rw_signal(false),
            vibration: create_rw_signal(false),
            notifications: create_rw_signal(false),
            audio: Rc::new(RefCell::new(None)),
        }
    }

    /// Pre-load the chime inside the click handler so the later `play()` is
    /// not blocked by autoplay policy.
    pub fn enable_sound(&self) {
        match HtmlAudioElement::new_with_src(CHIME_SRC) {
            Ok(audio) => {
                audio.set_preload("auto");
                *self.audio.borrow_mut() = Some(audio);
                self.sound.set(true);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("audio unavailable: {e:?}").into());
            }
        }
    }

    /// A short test pulse doubles as the user-gesture unlock.
    pub fn enable_vibration(&self) {
        if let Some(window) = web_sys::window() {
            window.navigator().vibrate_with_duration(50);
        }
        self.vibration.set(true);
    }

    /// Ask the browser for permission; the gate opens only on "granted".
    pub fn enable_notifications(&self) {
        let flag = self.notifications;
        spawn_local(async move {
            let Ok(promise) = Notification::request_permission() else {
                web_sys::console::warn_1(&"notifications unavailable".into());
                return;
            };
            match JsFuture::from(promise).await {
                Ok(result) => {
                    let granted = result.as_string().as_deref() == Some("granted");
                    flag.set(granted);
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("notification permission: {e:?}").into());
                }
            }
        });
    }

    /// Fire every enabled channel once. The caller guarantees this only runs
    /// on a transition into `called`, never on repeated observations.
    pub fn fire(&self, message: &str) {
        if self.sound.get_untracked() {
            if let Some(audio) = self.audio.borrow().as_ref() {
                let _ = audio.play();
            }
        }

        if self.vibration.get_untracked() {
            if let Some(window) = web_sys::window() {
                let pattern = js_sys::Array::new();
                for ms in [200, 100, 200] {
                    pattern.push(&wasm_bindgen::JsValue::from(ms));
                }
                window.navigator().vibrate_with_pattern(&pattern);
            }
        }

        if self.notifications.get_untracked()
            && Notification::permission() == NotificationPermission::Granted
        {
            let options = NotificationOptions::new();
            options.set_body(message);
            if let Err(e) = Notification::new_with_options(NOTIFICATION_TITLE, &options) {
                web_sys::console::warn_1(&format!("notification failed: {e:?}").into());
            }
        }
    }
}
