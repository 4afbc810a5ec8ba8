use iced::Task;

use crate::app::{App, AppEvent};
use crate::stores::Stores;
use crate::widgets::settings::SettingsCommand;
use crate::widgets::settings::services::error_chain;

/// Write a language code straight to the language store.
///
/// From the settings form's point of view this is an out-of-band change;
/// it learns about it through [`route_changed`].
pub(crate) fn write_language(
    stores: Stores,
    code: &'static str,
) -> Task<AppEvent> {
    Task::perform(
        async move {
            stores.language.set(code).map_err(|err| error_chain(&err))
        },
        |result| match result {
            Ok(()) => AppEvent::PreferencesChanged,
            Err(message) => AppEvent::PreferencesWriteFailed(message),
        },
    )
}

/// Apply preferences that changed outside the settings form.
///
/// The stores are read again here, so whichever write finished last is
/// what the app and the form end up showing.
pub(crate) fn route_changed(app: &mut App) -> Task<AppEvent> {
    let committed = app.stores.snapshot();
    app.apply_preferences(&committed);

    if app.widgets.settings.is_none() {
        return Task::none();
    }
    Task::done(AppEvent::SettingsCommand(SettingsCommand::CommittedChanged(
        committed,
    )))
}
