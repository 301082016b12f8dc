//! Theme Preference
//!
//! Dark/light mode persisted under a fixed localStorage key. The manager owns
//! the current state; the storage backend is swappable so tests can simulate
//! a page reload.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::THEME_STORAGE_KEY;

/// UI display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value stored in localStorage and written to `data-theme`
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle button
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

// ========================
// Storage Backends
// ========================

/// Persisted key/value slot for the theme string
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    fn clear(&self);
}

/// Browser localStorage
pub struct LocalThemeStorage {
    key: &'static str,
}

impl LocalThemeStorage {
    pub fn new() -> Self {
        Self { key: THEME_STORAGE_KEY }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn save(&self, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("[THEME] localStorage unavailable, preference not saved");
            return;
        };
        if let Err(e) = storage.set_item(self.key, value) {
            log::warn!("[THEME] Failed to save preference: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

/// In-memory slot; clones share the same value
#[derive(Clone, Default)]
pub struct MemoryThemeStorage {
    value: Rc<RefCell<Option<String>>>,
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}

// ========================
// Manager
// ========================

/// Current theme plus its persistence
pub struct ThemeManager<S: ThemeStorage> {
    storage: S,
    current: Theme,
}

impl<S: ThemeStorage> ThemeManager<S> {
    /// Read the persisted preference, defaulting to dark
    pub fn init(storage: S) -> Self {
        let current = storage
            .load()
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        log::info!("[THEME] Initial theme: {}", current.as_str());
        Self { storage, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.storage.save(theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    /// Drop the persisted preference and fall back to the default
    pub fn forget(&mut self) {
        self.storage.clear();
        self.current = Theme::default();
    }
}

/// Write `data-theme` on `<body>`
pub fn apply_to_document(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body.set_attribute("data-theme", theme.as_str()) {
        log::warn!("[THEME] Failed to set data-theme: {:?}", e);
    }
}
