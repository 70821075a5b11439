//! Light/Dark Theme
//!
//! Persists the user preference in `localStorage["theme"]` and falls back to
//! the system preference. Applied as a `data-theme` attribute on the document
//! element so CSS can switch palettes without a flash.

use crate::session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Saved preference, else the system preference, else light.
pub fn initial_theme() -> Theme {
    if let Some(saved) = session::theme().and_then(|v| Theme::from_str(&v)) {
        return saved;
    }

    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);

    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Set `data-theme` on `<html>`.
pub fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Flip, apply and persist; returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    session::set_theme(next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_twice_round_trips() {
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
    }

    #[test]
    fn parses_only_known_values() {
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("blue"), None);
    }
}
