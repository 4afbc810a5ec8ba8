/// UI events emitted by the chrome bar.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Open the settings screen, or close it when it is open.
    ToggleSettings,
    /// Switch the interface to the next catalog language.
    CycleLanguage,
}
