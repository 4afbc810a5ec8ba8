use iced::Task;

use super::command::SettingsCommand;
use super::event::{MountId, SettingsEffect};
use super::model::{FieldValue, SettingsData, SettingsField};
use super::services::{commit, open_api_key_page};
use super::state::SettingsState;
use crate::stores::Stores;

/// Collaborators the reducer needs besides its own state.
pub(crate) struct SettingsCtx<'a> {
    pub(crate) stores: &'a Stores,
    pub(crate) mount_id: MountId,
}

/// Reduce a settings command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut SettingsState,
    ctx: &SettingsCtx<'_>,
    command: SettingsCommand,
) -> Task<SettingsEffect> {
    match command {
        SettingsCommand::ApiKeyChanged(value) => {
            apply_field(state, SettingsField::ApiKey, FieldValue::Text(value));
            Task::none()
        },
        SettingsCommand::LanguageSelected(code) => {
            apply_field(state, SettingsField::Language, FieldValue::Text(code));
            Task::none()
        },
        SettingsCommand::ThemeSelected(theme) => {
            apply_field(state, SettingsField::Theme, FieldValue::Theme(theme));
            Task::none()
        },
        SettingsCommand::ToggleKeyVisibility => {
            state.toggle_key_visibility();
            Task::none()
        },
        SettingsCommand::OpenApiKeyLink => {
            Task::future(async { open_api_key_page() }).discard()
        },
        SettingsCommand::Save => match state.begin_save() {
            Some(draft) => request_save(ctx.stores.clone(), ctx.mount_id, draft),
            None => {
                log::debug!("save ignored: nothing to commit");
                Task::none()
            },
        },
        SettingsCommand::Discard => {
            state.discard();
            Task::none()
        },
        SettingsCommand::SaveCompleted(committed) => {
            state.finish_save(committed);
            Task::none()
        },
        SettingsCommand::SaveFailed { committed, message } => {
            log::warn!("settings save failed: {message}");
            state.fail_save(committed, message);
            Task::none()
        },
        SettingsCommand::CommittedChanged(committed) => {
            state.sync_committed(committed);
            Task::none()
        },
    }
}

fn apply_field(
    state: &mut SettingsState,
    field: SettingsField,
    value: FieldValue,
) {
    if let Err(err) = state.update_field(field, value) {
        log::error!("{err}");
        if cfg!(debug_assertions) {
            panic!("{err}");
        }
    }
}

fn request_save(
    stores: Stores,
    mount_id: MountId,
    draft: SettingsData,
) -> Task<SettingsEffect> {
    Task::perform(async move { commit(&stores, &draft) }, move |result| {
        match result {
            Ok(()) => SettingsEffect::SaveCompleted { mount_id },
            Err(message) => SettingsEffect::SaveFailed { mount_id, message },
        }
    })
}
