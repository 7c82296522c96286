//! Session persistence: last-visited route and theme.
//!
//! Hosts with a key-value surface (browser local storage, a preferences
//! file) inject it through [`KeyValueStore`]; hosts without one use
//! [`NullStore`] and every operation silently degrades to its default.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::repository::NoteRepository;

/// Storage key for the last-visited route.
pub const ROUTE_STORAGE_KEY: &str = "daily-notes-current-route";
/// Storage key for the theme.
pub const THEME_STORAGE_KEY: &str = "daily-notes-theme";

/// Minimal string key-value persistence surface.
pub trait KeyValueStore: Send + Sync {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value.
    fn set(&self, key: &str, value: &str);
    /// Remove a stored value.
    fn remove(&self, key: &str);
}

/// No-op store for hosts without a persistence surface.
///
/// Reads return nothing and writes are discarded.
#[derive(Debug, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-memory store for tests and native hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }
}

/// Display theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme (the default).
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// Stored string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized is `None`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            Some("light") => Some(Self::Light),
            Some("dark") => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Per-host session state over an injected [`KeyValueStore`].
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    /// Host-level theme preference, used when nothing is stored.
    ambient_theme: Option<ThemeMode>,
}

impl Session {
    /// Create a session over a store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            ambient_theme: None,
        }
    }

    /// Supply the host's ambient theme preference.
    #[must_use]
    pub fn with_ambient_theme(mut self, theme: ThemeMode) -> Self {
        self.ambient_theme = Some(theme);
        self
    }

    /// Persist the current route. An empty route clears the stored value.
    pub fn remember_route(&self, route: &str) {
        if route.is_empty() {
            self.store.remove(ROUTE_STORAGE_KEY);
        } else {
            self.store.set(ROUTE_STORAGE_KEY, route);
        }
    }

    /// The stored route, if it still addresses a note in the repository.
    #[must_use]
    pub fn saved_route(&self, repository: &NoteRepository) -> Option<String> {
        let saved = self.store.get(ROUTE_STORAGE_KEY)?;
        repository.is_valid_route(&saved).then_some(saved)
    }

    /// Resolve the theme: stored value, then ambient preference, then light.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        ThemeMode::parse(self.store.get(THEME_STORAGE_KEY).as_deref())
            .or(self.ambient_theme)
            .unwrap_or(ThemeMode::Light)
    }

    /// Persist a theme choice.
    pub fn set_theme(&self, theme: ThemeMode) {
        self.store.set(THEME_STORAGE_KEY, theme.as_str());
    }

    /// Switch to the other theme, persist it and return it.
    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }
}
