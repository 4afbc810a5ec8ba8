use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::errors::StoreError;
use super::{ApiKeyStore, LanguageStore, ThemeStore};
use crate::catalog::{DEFAULT_LANGUAGE, ThemeKind};

/// How the preferences file was found when opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PreferencesLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Committed preferences held in memory by the file backend.
struct Preferences {
    api_key: SecretString,
    language: String,
    theme: ThemeKind,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            language: String::from(DEFAULT_LANGUAGE),
            theme: ThemeKind::default(),
        }
    }
}

/// On-disk shape of the preferences file.
#[derive(Serialize)]
struct PreferencesDocument<'a> {
    api_key: &'a str,
    language: &'a str,
    theme: ThemeKind,
}

/// JSON-file backed implementation of every preference store.
///
/// Each `set` rewrites the whole file atomically and only updates the
/// in-memory copy once the write succeeded.
pub(crate) struct PreferencesFile {
    path: PathBuf,
    state: Mutex<Preferences>,
}

impl PreferencesFile {
    /// Open the preferences file at `path`, falling back to defaults when
    /// it is missing or unreadable as JSON.
    pub(crate) fn open(
        path: PathBuf,
    ) -> Result<(Self, PreferencesLoadStatus), StoreError> {
        let (preferences, status) = load_preferences(&path)?;
        let file = Self {
            path,
            state: Mutex::new(preferences),
        };
        Ok((file, status))
    }

    /// Start from default preferences without reading `path`.
    ///
    /// Used when the existing file cannot be read; the next successful
    /// write replaces it.
    pub(crate) fn with_defaults(path: PathBuf) -> Self {
        Self {
            path,
            state: Mutex::new(Preferences::default()),
        }
    }

    /// Path of the backing file.
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Preferences> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<F>(&self, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut guard = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        let mut next = Preferences {
            api_key: SecretString::from(
                guard.api_key.expose_secret().to_owned(),
            ),
            language: guard.language.clone(),
            theme: guard.theme,
        };
        apply(&mut next);

        save_preferences(&self.path, &next)?;
        *guard = next;
        Ok(())
    }
}

impl ApiKeyStore for PreferencesFile {
    fn get(&self) -> SecretString {
        SecretString::from(self.lock().api_key.expose_secret().to_owned())
    }

    fn set(&self, value: &str) -> Result<(), StoreError> {
        let value = value.to_owned();
        self.update(move |preferences| {
            preferences.api_key = SecretString::from(value);
        })
    }
}

impl LanguageStore for PreferencesFile {
    fn get(&self) -> String {
        self.lock().language.clone()
    }

    fn set(&self, code: &str) -> Result<(), StoreError> {
        let code = code.to_owned();
        self.update(move |preferences| preferences.language = code)
    }
}

impl ThemeStore for PreferencesFile {
    fn get(&self) -> ThemeKind {
        self.lock().theme
    }

    fn set(&self, theme: ThemeKind) -> Result<(), StoreError> {
        self.update(move |preferences| preferences.theme = theme)
    }
}

fn load_preferences(
    path: &Path,
) -> Result<(Preferences, PreferencesLoadStatus), StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((
                Preferences::default(),
                PreferencesLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok((
                Preferences::default(),
                PreferencesLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok((preferences_from_json(&parsed), PreferencesLoadStatus::Loaded))
}

fn preferences_from_json(value: &serde_json::Value) -> Preferences {
    let mut preferences = Preferences::default();

    if let Some(api_key) = read_string_field(value, "api_key") {
        preferences.api_key = SecretString::from(api_key);
    }

    if let Some(language) =
        read_string_field(value, "language").filter(|code| !code.is_empty())
    {
        preferences.language = language;
    }

    if let Some(theme) = value
        .get("theme")
        .cloned()
        .and_then(|theme| serde_json::from_value::<ThemeKind>(theme).ok())
    {
        preferences.theme = theme;
    }

    preferences
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn save_preferences(
    path: &Path,
    preferences: &Preferences,
) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let document = PreferencesDocument {
        api_key: preferences.api_key.expose_secret(),
        language: &preferences.language,
        theme: preferences.theme,
    };
    let payload = serde_json::to_string_pretty(&document)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
