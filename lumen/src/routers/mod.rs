use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod chrome;
pub(crate) mod preferences;
pub(crate) mod settings;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Chrome widget
        AppEvent::ChromeUi(event) => chrome::route_event(app, event),
        // Settings widget
        AppEvent::SettingsUi(event) => settings::route_event(app, event),
        AppEvent::SettingsEffect(effect) => settings::route_effect(app, effect),
        AppEvent::SettingsCommand(command) => {
            settings::route_command(app, command)
        },
        // Preferences written outside the settings form
        AppEvent::PreferencesChanged => preferences::route_changed(app),
        AppEvent::PreferencesWriteFailed(message) => {
            log::warn!("preferences write failed: {message}");
            Task::none()
        },
    }
}
