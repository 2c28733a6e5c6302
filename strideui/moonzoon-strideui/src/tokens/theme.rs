// Theme Management System

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

type ThemePersistenceFn = Option<Box<dyn Fn(Theme) + Send + Sync>>;

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Dark));

static CUSTOM_PERSISTENCE: Lazy<Mutable<ThemePersistenceFn>> = Lazy::new(|| Mutable::new(None));

const STORAGE_KEY: &str = "strideui-theme";

/// Initialize the theme system. When a custom persistence hook is supplied
/// (e.g. an app that stores its config server-side), localStorage is not
/// touched; otherwise the stored value wins over the default.
pub fn init_theme(initial_theme: Option<Theme>, custom_persistence: ThemePersistenceFn) {
    CUSTOM_PERSISTENCE.set(custom_persistence);

    let theme_to_use = if let Some(theme) = initial_theme {
        theme
    } else if CUSTOM_PERSISTENCE.lock_ref().is_some() {
        Theme::Dark
    } else {
        let stored_theme = local_storage()
            .get(STORAGE_KEY)
            .unwrap_or(Ok(String::new()))
            .unwrap_or_default();
        match stored_theme.as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    };

    THEME.set(theme_to_use);
}

/// Current theme as a signal for reactive styling.
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Set the theme and persist it through the configured mechanism.
pub fn set_theme(new_theme: Theme) {
    THEME.set(new_theme);

    if let Some(persistence_fn) = CUSTOM_PERSISTENCE.lock_ref().as_ref() {
        persistence_fn(new_theme);
    } else {
        let theme_str = match new_theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        let _ = local_storage().insert(STORAGE_KEY, theme_str);
    }
}

pub fn current_theme() -> Theme {
    THEME.get()
}

pub fn toggle_theme() {
    let new_theme = match current_theme() {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    set_theme(new_theme);
}

/// Set theme without invoking the persistence hook. Used when syncing from
/// an external source to prevent circular updates.
pub fn set_theme_without_callback(new_theme: Theme) {
    THEME.set(new_theme);
}
