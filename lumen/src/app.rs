use std::sync::Arc;

use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme, alignment};

use crate::catalog::{self, LANGUAGES};
use crate::config::{AppConfig, ConfigLoadStatus, ConfigPaths, load_config};
use crate::i18n::Translator;
use crate::routers;
use crate::stores::{PreferencesFile, PreferencesLoadStatus, Stores};
use crate::theme::{ThemeManager, ThemeProps};
use crate::widgets::Widgets;
use crate::widgets::chrome::ChromeEvent;
use crate::widgets::chrome::view::action_bar::{self, ActionBarProps};
use crate::widgets::settings::model::SettingsData;
use crate::widgets::settings::view::settings_form::{self, SettingsFormProps};
use crate::widgets::settings::{SettingsCommand, SettingsEffect, SettingsEvent};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 760.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

const HOME_HINT_SIZE: f32 = 15.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Chrome widget
    ChromeUi(ChromeEvent),
    // Settings widget
    SettingsUi(SettingsEvent),
    SettingsEffect(SettingsEffect),
    SettingsCommand(SettingsCommand),
    // Preferences written outside the settings form
    PreferencesChanged,
    PreferencesWriteFailed(String),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) stores: Stores,
    pub(crate) translator: Translator,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application from the on-disk config and preferences.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let paths = ConfigPaths::resolve();
        let config = read_config(&paths);
        let stores = open_preferences(&paths);

        (Self::with_stores(config, stores), Task::none())
    }

    /// Build the application around already constructed stores.
    pub(crate) fn with_stores(config: AppConfig, stores: Stores) -> Self {
        let committed = stores.snapshot();
        log::debug!("starting with {committed:?}");

        Self {
            config,
            translator: Translator::new(committed.language()),
            theme_manager: ThemeManager::new(committed.theme()),
            stores,
            widgets: Widgets::new(),
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.translator.t("app.title")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        routers::route(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        let theme = ThemeProps::new(self.theme_manager.current());
        let is_settings_open = self.widgets.settings.is_some();
        let settings_label = if is_settings_open {
            self.translator.t("chrome.closeSettings")
        } else {
            self.translator.t("chrome.openSettings")
        };
        let language = catalog::language(self.translator.language())
            .unwrap_or(&LANGUAGES[0]);

        let header = action_bar::view(ActionBarProps {
            title: self.translator.t("app.title"),
            settings_label,
            language_label: self.translator.t("chrome.switchLanguage"),
            language,
            is_settings_open,
            theme,
        })
        .map(AppEvent::ChromeUi);

        let body: Element<'_, AppEvent, Theme, iced::Renderer> =
            match &self.widgets.settings {
                Some(widget) => settings_form::view(SettingsFormProps {
                    vm: widget.vm(),
                    translator: &self.translator,
                    theme,
                })
                .map(AppEvent::SettingsUi),
                None => container(
                    text(self.translator.t("home.hint")).size(HOME_HINT_SIZE),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into(),
            };

        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Bring theme and translations in line with committed preferences.
    pub(crate) fn apply_preferences(&mut self, committed: &SettingsData) {
        self.theme_manager.set_theme(committed.theme());

        if self.translator.language() != committed.language() {
            log::info!("interface language set to {}", committed.language());
            self.translator = Translator::new(committed.language());
        }
    }
}

fn read_config(paths: &ConfigPaths) -> AppConfig {
    match load_config(paths) {
        Ok((config, status)) => {
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!(
                        "config loaded from {}",
                        paths.config_file().display()
                    );
                },
                ConfigLoadStatus::Missing => {
                    log::info!("no config file; using defaults");
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!("config file invalid: {message}");
                },
            }
            config
        },
        Err(err) => {
            log::warn!("config read failed: {err}");
            AppConfig::default()
        },
    }
}

fn open_preferences(paths: &ConfigPaths) -> Stores {
    let path = paths.preferences_file();
    let file = match PreferencesFile::open(path.clone()) {
        Ok((file, status)) => {
            match status {
                PreferencesLoadStatus::Loaded => {
                    log::info!("preferences loaded from {}", path.display());
                },
                PreferencesLoadStatus::Missing => {
                    log::info!(
                        "no preferences at {}; using defaults",
                        path.display()
                    );
                },
                PreferencesLoadStatus::Invalid(message) => {
                    log::warn!("preferences file invalid: {message}");
                },
            }
            file
        },
        Err(err) => {
            log::error!("preferences read failed: {err}");
            PreferencesFile::with_defaults(path)
        },
    };

    log::debug!("preferences backed by {}", file.path().display());
    Stores::from_backend(Arc::new(file))
}
