use super::errors::SettingsError;
use super::model::{
    FieldValue, SavePhase, SettingsData, SettingsField, SyncPolicy,
    compute_dirty,
};

/// Committed and draft settings plus presentation flags for the form.
#[derive(Debug)]
pub(crate) struct SettingsState {
    committed: SettingsData,
    draft: SettingsData,
    policy: SyncPolicy,
    is_key_visible: bool,
    is_saving: bool,
    dirty: bool,
    last_error: Option<String>,
}

impl SettingsState {
    /// Create state whose draft is a verbatim copy of `committed`.
    pub(crate) fn from_committed(
        committed: SettingsData,
        policy: SyncPolicy,
    ) -> Self {
        Self {
            draft: committed.clone(),
            committed,
            policy,
            is_key_visible: false,
            is_saving: false,
            dirty: false,
            last_error: None,
        }
    }

    /// Return the committed values the draft is compared against.
    #[cfg(test)]
    pub(crate) fn committed(&self) -> &SettingsData {
        &self.committed
    }

    /// Return the editable draft.
    pub(crate) fn draft(&self) -> &SettingsData {
        &self.draft
    }

    /// Return whether the draft differs from the committed values.
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[cfg(test)]
    pub(crate) fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub(crate) fn is_key_visible(&self) -> bool {
        self.is_key_visible
    }

    /// Return the message of the last failed save, if any.
    pub(crate) fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn phase(&self) -> SavePhase {
        if self.is_saving {
            SavePhase::Saving
        } else if self.dirty {
            SavePhase::Dirty
        } else {
            SavePhase::Idle
        }
    }

    pub(crate) fn can_save(&self) -> bool {
        self.dirty && !self.is_saving
    }

    /// Replace one draft field. Edits are dropped while a save is pending.
    pub(crate) fn update_field(
        &mut self,
        field: SettingsField,
        value: FieldValue,
    ) -> Result<(), SettingsError> {
        if self.is_saving {
            log::debug!("ignoring {field} edit while saving");
            return Ok(());
        }

        self.draft = self.draft.with_field(field, value)?;
        self.update_dirty();
        Ok(())
    }

    pub(crate) fn toggle_key_visibility(&mut self) {
        self.is_key_visible = !self.is_key_visible;
    }

    /// Throw away unsaved edits.
    pub(crate) fn discard(&mut self) {
        if self.is_saving {
            return;
        }

        self.draft = self.committed.clone();
        self.last_error = None;
        self.update_dirty();
    }

    /// Reconcile the draft with committed values that changed out-of-band.
    pub(crate) fn sync_committed(&mut self, committed: SettingsData) {
        match self.policy {
            SyncPolicy::ExternalWins => {
                self.draft = committed.clone();
            },
            SyncPolicy::LocalEditsWin => {
                for field in SettingsField::SAVE_ORDER {
                    if self.draft.field_matches(&self.committed, field) {
                        self.draft.take_field(&committed, field);
                    }
                }
            },
        }

        self.committed = committed;
        self.update_dirty();
    }

    /// Enter the saving phase and return the draft to write.
    ///
    /// Returns `None` when there is nothing to save or a save is pending.
    pub(crate) fn begin_save(&mut self) -> Option<SettingsData> {
        if !self.can_save() {
            return None;
        }

        self.is_saving = true;
        self.last_error = None;
        Some(self.draft.clone())
    }

    /// Leave the saving phase after every store accepted its write.
    pub(crate) fn finish_save(&mut self, committed: SettingsData) {
        self.is_saving = false;
        self.last_error = None;
        self.draft = committed.clone();
        self.committed = committed;
        self.update_dirty();
    }

    /// Leave the saving phase after a store rejected its write.
    ///
    /// The draft is kept; `committed` is what the stores hold now, which may
    /// include fields written before the failure.
    pub(crate) fn fail_save(&mut self, committed: SettingsData, message: String) {
        self.is_saving = false;
        self.last_error = Some(message);
        self.committed = committed;
        self.update_dirty();
    }

    fn update_dirty(&mut self) {
        self.dirty = compute_dirty(&self.draft, &self.committed);
    }
}
