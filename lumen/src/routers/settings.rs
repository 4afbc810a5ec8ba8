use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::settings::{
    SettingsCommand, SettingsEffect, SettingsEvent, SettingsWidget,
};

/// Route a settings UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: SettingsEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a settings command to the mounted form, if any.
pub(crate) fn route_command(
    app: &mut App,
    command: SettingsCommand,
) -> Task<AppEvent> {
    let Some(widget) = app.widgets.settings.as_mut() else {
        log::debug!("settings command dropped: form is not mounted");
        return Task::none();
    };

    widget.reduce(command).map(AppEvent::SettingsEffect)
}

/// Route a save completion back to the form that started it.
///
/// Completions may arrive out of order with other store writes, so the
/// committed values are read from the stores here rather than taken from
/// the task. Theme and translations follow them even when the form that
/// saved has been unmounted since.
pub(crate) fn route_effect(
    app: &mut App,
    effect: SettingsEffect,
) -> Task<AppEvent> {
    let committed = app.stores.snapshot();
    app.apply_preferences(&committed);

    let Some(mounted) = app.widgets.settings.as_ref().map(|w| w.mount_id())
    else {
        log::debug!("save completion arrived after the form was closed");
        return Task::none();
    };

    if mounted != effect.mount_id() {
        log::debug!(
            "save completion for {:?} ignored; {mounted:?} is mounted",
            effect.mount_id()
        );
        return route_command(app, SettingsCommand::CommittedChanged(committed));
    }

    let command = match effect {
        SettingsEffect::SaveCompleted { .. } => {
            log::info!("settings saved");
            SettingsCommand::SaveCompleted(committed)
        },
        SettingsEffect::SaveFailed { message, .. } => {
            SettingsCommand::SaveFailed { committed, message }
        },
    };
    route_command(app, command)
}

/// Open the settings form, or close it when it is already open.
///
/// Closing drops the draft together with any unsaved edits.
pub(crate) fn toggle_mount(app: &mut App) {
    if let Some(widget) = app.widgets.settings.take() {
        if widget.is_dirty() {
            log::debug!("closing settings with unsaved edits");
        }
        return;
    }

    let mount_id = app.widgets.next_mount_id();
    app.widgets.settings = Some(SettingsWidget::mount(
        mount_id,
        app.stores.clone(),
        app.config.sync_policy,
    ));
}

fn map_event_to_command(event: SettingsEvent) -> SettingsCommand {
    match event {
        SettingsEvent::ApiKeyChanged(value) => {
            SettingsCommand::ApiKeyChanged(value)
        },
        SettingsEvent::LanguageSelected(code) => {
            SettingsCommand::LanguageSelected(code)
        },
        SettingsEvent::ThemeSelected(theme) => {
            SettingsCommand::ThemeSelected(theme)
        },
        SettingsEvent::ToggleKeyVisibility => {
            SettingsCommand::ToggleKeyVisibility
        },
        SettingsEvent::OpenApiKeyLink => SettingsCommand::OpenApiKeyLink,
        SettingsEvent::Save => SettingsCommand::Save,
        SettingsEvent::Discard => SettingsCommand::Discard,
    }
}
