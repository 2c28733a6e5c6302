//! UI configuration domain.
//!
//! The theme and admin table page size are persisted through the backend
//! into the user's config file. The strideui theme system is wired to this
//! domain via its custom-persistence hook, so toggling the theme saves the
//! config instead of touching localStorage.

use crate::connection::ConnectionAdapter;
use crate::dataflow::{relay, Actor, Atom, Relay};
use futures::{select, StreamExt};
use moonzoon_strideui::{set_theme_without_callback, Theme};
use shared::{UiSection, UpMsg};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppConfig {
    pub admin_page_size: Atom<u32>,
    pub config_loaded_relay: Relay<shared::AppConfig>,
    pub theme_changed_relay: Relay<Theme>,
    #[allow(dead_code)]
    sync_actor: Actor<()>,
}

fn theme_from_str(theme: &str) -> Theme {
    match theme {
        "light" => Theme::Light,
        _ => Theme::Dark,
    }
}

fn theme_to_str(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

impl AppConfig {
    pub async fn new(connection: Arc<ConnectionAdapter>) -> Self {
        let (config_loaded_relay, mut config_loaded_stream) = relay::<shared::AppConfig>();
        let (theme_changed_relay, mut theme_changed_stream) = relay::<Theme>();

        let admin_page_size = Atom::new(UiSection::default().admin_page_size);

        let sync_actor = Actor::new((), {
            let admin_page_size = admin_page_size.clone();
            async move |_state| {
                // Last applied values, used when writing the config back.
                let mut current_theme = Theme::Dark;
                let mut current_page_size = UiSection::default().admin_page_size;
                loop {
                    select! {
                        config = config_loaded_stream.next() => {
                            if let Some(config) = config {
                                if !config.app.is_supported_version() {
                                    zoon::println!(
                                        "Unsupported config version {}, using defaults",
                                        config.app.version
                                    );
                                    continue;
                                }
                                current_theme = theme_from_str(&config.ui.theme);
                                current_page_size = config.ui.admin_page_size;
                                set_theme_without_callback(current_theme);
                                admin_page_size.set(current_page_size);
                            }
                        }
                        theme = theme_changed_stream.next() => {
                            if let Some(theme) = theme {
                                current_theme = theme;
                                let config = shared::AppConfig {
                                    app: shared::AppSection::default(),
                                    ui: UiSection {
                                        theme: theme_to_str(theme).to_string(),
                                        admin_page_size: current_page_size,
                                    },
                                };
                                connection.send_up_msg(UpMsg::SaveConfig(config)).await;
                            }
                        }
                    }
                }
            }
        });

        Self {
            admin_page_size,
            config_loaded_relay,
            theme_changed_relay,
            sync_actor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_strings_fall_back_to_dark() {
        assert_eq!(theme_from_str("light"), Theme::Light);
        assert_eq!(theme_from_str("dark"), Theme::Dark);
        assert_eq!(theme_from_str("solarized"), Theme::Dark);
    }

    #[test]
    fn theme_round_trips_through_config_strings() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme_from_str(theme_to_str(theme)), theme);
        }
    }
}
