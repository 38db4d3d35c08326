use serde::{Deserialize, Serialize};

/// Key used to persist the theme preference in the browser's `localStorage`.
pub const STORAGE_KEY: &str = "theme";

/// Class set on the document root element while dark mode is active. All
/// stylesheet rules key off `html.dark`.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only the exact literal `"dark"` selects
    /// dark mode; absence or any other value falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The literal written to storage, matching what `from_stored` reads.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Durable key-value store holding the preference under [`STORAGE_KEY`].
///
/// Best-effort: a failed read is the same as no stored value, and a failed
/// write is dropped after logging. No retry, no fallback store.
pub trait ThemeStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
}

/// `localStorage`-backed store used in the browser.
pub struct BrowserStore;

impl ThemeStore for BrowserStore {
    fn read(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }

    fn write(&self, value: &str) {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => {
                if storage.set_item(STORAGE_KEY, value).is_err() {
                    log::warn!("Failed to persist theme preference");
                }
            }
            None => log::warn!("localStorage unavailable, theme preference not persisted"),
        }
    }
}

/// Read the persisted preference from `store`, defaulting to light.
pub fn load_from(store: &impl ThemeStore) -> Theme {
    Theme::from_stored(store.read().as_deref())
}

/// Persist `theme` to `store` as its string literal.
pub fn persist_to(store: &impl ThemeStore, theme: Theme) {
    store.write(theme.as_str());
}

/// Startup read of the browser store.
pub fn load_theme() -> Theme {
    let theme = load_from(&BrowserStore);
    log::debug!("Restored theme preference: {}", theme.as_str());
    theme
}

/// Synchronize the rest of the world with `theme`: flip the [`DARK_CLASS`]
/// flag on the document root and persist the preference. Invoked once at
/// startup and again after every toggle, so the in-memory value, the stored
/// value and the presentation flag never diverge.
pub fn apply_theme(theme: Theme) {
    set_root_flag(theme);
    persist_to(&BrowserStore, theme);
}

fn set_root_flag(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else {
        return;
    };

    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1(DARK_CLASS)
    } else {
        class_list.remove_1(DARK_CLASS)
    };
    if result.is_err() {
        log::warn!("Failed to update root theme class");
    }
}
