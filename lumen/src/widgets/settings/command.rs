use super::model::SettingsData;
use crate::catalog::ThemeKind;

/// Internal commands dispatched to the settings reducer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsCommand {
    /// The API key text input changed.
    ApiKeyChanged(String),
    /// A language button was pressed.
    LanguageSelected(String),
    /// A theme swatch was pressed.
    ThemeSelected(ThemeKind),
    /// Show or hide the API key characters.
    ToggleKeyVisibility,
    /// Open the page where an API key can be created.
    OpenApiKeyLink,
    /// Request writing the draft to the stores.
    Save,
    /// Discard draft edits and restore the committed values.
    Discard,
    /// Stores accepted every write; carries the values read back.
    SaveCompleted(SettingsData),
    /// A store rejected a write; carries the values the stores hold now.
    SaveFailed {
        committed: SettingsData,
        message: String,
    },
    /// Committed values changed outside the settings form.
    CommittedChanged(SettingsData),
}
