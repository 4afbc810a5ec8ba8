use std::fmt;

use serde::Deserialize;
use zeroize::Zeroizing;

use super::errors::SettingsError;
use crate::catalog::{DEFAULT_LANGUAGE, ThemeKind};

/// Page where users create an API key.
pub(crate) const API_KEY_URL: &str = "https://aistudio.google.com/api-keys";

/// One editable preference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsField {
    ApiKey,
    Language,
    Theme,
}

impl SettingsField {
    /// Fields in the order they are written on save.
    pub(crate) const SAVE_ORDER: [SettingsField; 3] = [
        SettingsField::ApiKey,
        SettingsField::Language,
        SettingsField::Theme,
    ];
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingsField::ApiKey => "api key",
            SettingsField::Language => "language",
            SettingsField::Theme => "theme",
        };
        f.write_str(name)
    }
}

/// New value for a field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldValue {
    Text(String),
    Theme(ThemeKind),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Theme(_) => "theme",
        }
    }
}

/// Preference values, used both for the committed snapshot and the draft.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct SettingsData {
    api_key: Zeroizing<String>,
    language: String,
    theme: ThemeKind,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self::new(String::new(), String::from(DEFAULT_LANGUAGE), ThemeKind::Dark)
    }
}

impl fmt::Debug for SettingsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("SettingsData")
            .field("api_key", &api_key)
            .field("language", &self.language)
            .field("theme", &self.theme)
            .finish()
    }
}

impl SettingsData {
    pub(crate) fn new(
        api_key: String,
        language: String,
        theme: ThemeKind,
    ) -> Self {
        Self {
            api_key: Zeroizing::new(api_key),
            language,
            theme,
        }
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.as_str()
    }

    pub(crate) fn language(&self) -> &str {
        &self.language
    }

    pub(crate) fn theme(&self) -> ThemeKind {
        self.theme
    }

    /// Return a copy with exactly one field replaced.
    ///
    /// Text values are accepted verbatim; no key or language format is
    /// enforced.
    pub(crate) fn with_field(
        &self,
        field: SettingsField,
        value: FieldValue,
    ) -> Result<Self, SettingsError> {
        let mut next = self.clone();
        match (field, value) {
            (SettingsField::ApiKey, FieldValue::Text(text)) => {
                next.api_key = Zeroizing::new(text);
            },
            (SettingsField::Language, FieldValue::Text(code)) => {
                next.language = code;
            },
            (SettingsField::Theme, FieldValue::Theme(theme)) => {
                next.theme = theme;
            },
            (field, value) => {
                return Err(SettingsError::InvalidFieldUpdate {
                    field,
                    found: value.kind(),
                });
            },
        }
        Ok(next)
    }

    /// Return whether `field` holds the same value in both snapshots.
    pub(crate) fn field_matches(
        &self,
        other: &SettingsData,
        field: SettingsField,
    ) -> bool {
        match field {
            SettingsField::ApiKey => self.api_key == other.api_key,
            SettingsField::Language => self.language == other.language,
            SettingsField::Theme => self.theme == other.theme,
        }
    }

    /// Copy `field` from `source` into this snapshot.
    pub(crate) fn take_field(
        &mut self,
        source: &SettingsData,
        field: SettingsField,
    ) {
        match field {
            SettingsField::ApiKey => self.api_key = source.api_key.clone(),
            SettingsField::Language => {
                self.language = source.language.clone();
            },
            SettingsField::Theme => self.theme = source.theme,
        }
    }
}

/// Field-wise difference between a draft and the committed values.
pub(crate) fn compute_dirty(
    draft: &SettingsData,
    committed: &SettingsData,
) -> bool {
    SettingsField::SAVE_ORDER
        .iter()
        .any(|field| !draft.field_matches(committed, *field))
}

/// How the draft reacts when committed values change underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SyncPolicy {
    /// Committed values overwrite the whole draft; unsaved edits are lost.
    #[default]
    ExternalWins,
    /// Fields with unsaved edits keep their draft value.
    LocalEditsWin,
}

/// Save lifecycle of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SavePhase {
    Idle,
    Dirty,
    Saving,
}

/// Read-only data the settings form renders from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsViewModel<'a> {
    pub(crate) draft: &'a SettingsData,
    pub(crate) is_key_visible: bool,
    pub(crate) phase: SavePhase,
    pub(crate) can_save: bool,
    pub(crate) last_error: Option<&'a str>,
}
