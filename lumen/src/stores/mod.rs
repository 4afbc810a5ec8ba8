mod errors;
mod file;
#[cfg(test)]
pub(crate) mod memory;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::catalog::ThemeKind;
use crate::widgets::settings::model::SettingsData;

pub(crate) use errors::StoreError;
pub(crate) use file::{PreferencesFile, PreferencesLoadStatus};

/// Persistence for the provider API key.
pub(crate) trait ApiKeyStore: Send + Sync {
    /// Return the committed key; empty when none is configured.
    fn get(&self) -> SecretString;

    fn set(&self, value: &str) -> Result<(), StoreError>;
}

/// Persistence for the interface language code.
pub(crate) trait LanguageStore: Send + Sync {
    fn get(&self) -> String;

    fn set(&self, code: &str) -> Result<(), StoreError>;
}

/// Persistence for the visual theme.
pub(crate) trait ThemeStore: Send + Sync {
    fn get(&self) -> ThemeKind;

    fn set(&self, theme: ThemeKind) -> Result<(), StoreError>;
}

/// The three preference stores injected into the application.
#[derive(Clone)]
pub(crate) struct Stores {
    pub(crate) api_key: Arc<dyn ApiKeyStore>,
    pub(crate) language: Arc<dyn LanguageStore>,
    pub(crate) theme: Arc<dyn ThemeStore>,
}

impl Stores {
    /// Route all three concerns to one backend implementing every store.
    pub(crate) fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: ApiKeyStore + LanguageStore + ThemeStore + 'static,
    {
        Self {
            api_key: backend.clone(),
            language: backend.clone(),
            theme: backend,
        }
    }

    /// Read the currently committed values from every store.
    pub(crate) fn snapshot(&self) -> SettingsData {
        let api_key = self.api_key.get();
        SettingsData::new(
            api_key.expose_secret().to_owned(),
            self.language.get(),
            self.theme.get(),
        )
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
