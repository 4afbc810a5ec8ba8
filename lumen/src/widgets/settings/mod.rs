pub(crate) mod command;
mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod services;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::SettingsCommand;
pub(crate) use event::{MountId, SettingsEffect, SettingsEvent};
use iced::Task;
use model::{SettingsViewModel, SyncPolicy};
use reducer::SettingsCtx;
use state::SettingsState;

use crate::stores::Stores;

/// Settings widget: stages edits to the API key, language and theme in a
/// draft and commits them to the injected stores on save.
pub(crate) struct SettingsWidget {
    mount_id: MountId,
    stores: Stores,
    state: SettingsState,
}

impl SettingsWidget {
    /// Mount a new form whose draft starts from the stores' current values.
    pub(crate) fn mount(
        mount_id: MountId,
        stores: Stores,
        policy: SyncPolicy,
    ) -> Self {
        let committed = stores.snapshot();
        Self {
            mount_id,
            stores,
            state: SettingsState::from_committed(committed, policy),
        }
    }

    pub(crate) fn mount_id(&self) -> MountId {
        self.mount_id
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: SettingsCommand,
    ) -> Task<SettingsEffect> {
        let ctx = SettingsCtx {
            stores: &self.stores,
            mount_id: self.mount_id,
        };
        reducer::reduce(&mut self.state, &ctx, command)
    }

    /// Return a read-only view model for the settings form.
    pub(crate) fn vm(&self) -> SettingsViewModel<'_> {
        SettingsViewModel {
            draft: self.state.draft(),
            is_key_visible: self.state.is_key_visible(),
            phase: self.state.phase(),
            can_save: self.state.can_save(),
            last_error: self.state.last_error(),
        }
    }

    /// Return the committed values the draft is compared against.
    #[cfg(test)]
    pub(crate) fn committed(&self) -> &model::SettingsData {
        self.state.committed()
    }

    /// Return whether the draft differs from the committed values.
    pub(crate) fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &SettingsState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::{MountId, SettingsCommand, SettingsWidget};
    use crate::catalog::ThemeKind;
    use crate::stores::memory::{MemoryStores, StoreCall};
    use crate::widgets::settings::model::{SavePhase, SyncPolicy};
    use crate::widgets::settings::services::commit;

    #[test]
    fn given_mounted_widget_when_api_key_saved_then_full_scenario_holds() {
        let backend = MemoryStores::new("", "en", ThemeKind::Dark);
        let stores = backend.stores();
        let mut widget =
            SettingsWidget::mount(MountId(7), stores.clone(), SyncPolicy::default());
        assert!(!widget.is_dirty());

        let _task = widget
            .reduce(SettingsCommand::ApiKeyChanged(String::from("sk-123")));
        assert!(widget.is_dirty());
        let _task = widget.reduce(SettingsCommand::Save);
        assert_eq!(widget.vm().phase, SavePhase::Saving);

        // Run the store writes the save task performs.
        let draft = widget.state().draft().clone();
        commit(&stores, &draft).expect("writes should succeed");
        let _task =
            widget.reduce(SettingsCommand::SaveCompleted(stores.snapshot()));

        let api_key_writes = backend
            .calls()
            .into_iter()
            .filter(|call| matches!(call, StoreCall::ApiKey(_)))
            .count();
        assert_eq!(api_key_writes, 1);
        assert!(
            backend
                .calls()
                .contains(&StoreCall::Language(String::from("en")))
        );
        assert!(backend.calls().contains(&StoreCall::Theme(ThemeKind::Dark)));
        assert_eq!(widget.vm().phase, SavePhase::Idle);
        assert!(!widget.is_dirty());
        assert_eq!(widget.committed().api_key(), "sk-123");
    }

    #[test]
    fn given_mount_when_created_then_draft_copies_store_values() {
        let backend = MemoryStores::new("sk-old", "ja", ThemeKind::Fun);

        let widget = SettingsWidget::mount(
            MountId(1),
            backend.stores(),
            SyncPolicy::LocalEditsWin,
        );

        let vm = widget.vm();
        assert_eq!(vm.draft.api_key(), "sk-old");
        assert_eq!(vm.draft.language(), "ja");
        assert_eq!(vm.draft.theme(), ThemeKind::Fun);
        assert!(!vm.can_save);
        assert_eq!(widget.mount_id(), MountId(1));
    }
}
