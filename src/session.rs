//! Client-Persisted Identifiers
//!
//! Typed helpers over `localStorage` (`ticketId`, `queueId`, `lang`, `theme`)
//! and `sessionStorage` (`activeQueueId`). These are the only things this
//! client remembers across page loads.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok()?
}

fn get(storage: Option<Storage>, key: &str) -> Option<String> {
    storage?.get_item(key).ok()?
}

fn set(storage: Option<Storage>, key: &str, value: &str) {
    if let Some(storage) = storage {
        let _ = storage.set_item(key, value);
    }
}

fn remove(storage: Option<Storage>, key: &str) {
    if let Some(storage) = storage {
        let _ = storage.remove_item(key);
    }
}

// ============ Customer ticket ============

pub fn ticket_id() -> Option<i64> {
    get(local_storage(), "ticketId")?.parse().ok()
}

/// Written on join so the status page can find the ticket after a reload.
pub fn remember_ticket(ticket_id: i64, queue_id: i64) {
    set(local_storage(), "ticketId", &ticket_id.to_string());
    set(local_storage(), "queueId", &queue_id.to_string());
}

/// Cleared on leave and on terminal status.
pub fn forget_ticket() {
    remove(local_storage(), "ticketId");
    remove(local_storage(), "queueId");
}

// ============ Staff ============

pub fn active_queue_id() -> Option<i64> {
    get(session_storage(), "activeQueueId")?.parse().ok()
}

pub fn set_active_queue_id(queue_id: i64) {
    set(session_storage(), "activeQueueId", &queue_id.to_string());
}

/// Logout wipes both stores, matching the original client.
pub fn clear_all() {
    if let Some(storage) = session_storage() {
        let _ = storage.clear();
    }
    if let Some(storage) = local_storage() {
        let _ = storage.clear();
    }
}

// ============ Preferences ============

pub fn lang() -> Option<String> {
    get(local_storage(), "lang")
}

pub fn set_lang(lang: &str) {
    set(local_storage(), "lang", lang);
}

pub fn theme() -> Option<String> {
    get(local_storage(), "theme")
}

pub fn set_theme(theme: &str) {
    set(local_storage(), "theme", theme);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn forgetting_clears_both_ids() {
        remember_ticket(42, 7);
        assert_eq!(ticket_id(), Some(42));

        // Same cleanup runs on leave and on a terminal status.
        forget_ticket();
        assert_eq!(ticket_id(), None);
    }
}
