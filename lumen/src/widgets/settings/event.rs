use crate::catalog::ThemeKind;

/// Identifies one mounted instance of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MountId(pub(crate) u64);

/// UI events emitted by the settings presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    ApiKeyChanged(String),
    LanguageSelected(String),
    ThemeSelected(ThemeKind),
    ToggleKeyVisibility,
    OpenApiKeyLink,
    Save,
    Discard,
}

/// Effect events produced by the settings reducer, routed outward.
///
/// Completions carry no values; the stores are read again when they are
/// routed, so a late completion cannot replay an older snapshot.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEffect {
    /// Every store accepted its write.
    SaveCompleted { mount_id: MountId },
    /// A store rejected its write.
    SaveFailed { mount_id: MountId, message: String },
}

impl SettingsEffect {
    /// Return the form instance that started the save.
    pub(crate) fn mount_id(&self) -> MountId {
        match self {
            SettingsEffect::SaveCompleted { mount_id }
            | SettingsEffect::SaveFailed { mount_id, .. } => *mount_id,
        }
    }
}
