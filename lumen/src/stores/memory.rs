use std::sync::{Arc, Mutex, PoisonError};

use secrecy::SecretString;

use super::{ApiKeyStore, LanguageStore, StoreError, Stores, ThemeStore};
use crate::catalog::ThemeKind;

/// One recorded `set` call against the in-memory stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreCall {
    ApiKey(String),
    Language(String),
    Theme(ThemeKind),
}

/// Which store should reject writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailingStore {
    ApiKey,
    Language,
    Theme,
}

#[derive(Default)]
struct Inner {
    api_key: String,
    language: String,
    theme: ThemeKind,
    calls: Vec<StoreCall>,
    failing: Option<FailingStore>,
}

/// In-memory stores recording every write, for tests.
#[derive(Clone, Default)]
pub(crate) struct MemoryStores {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStores {
    pub(crate) fn new(api_key: &str, language: &str, theme: ThemeKind) -> Self {
        let inner = Inner {
            api_key: api_key.to_owned(),
            language: language.to_owned(),
            theme,
            ..Inner::default()
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Make every write to `store` fail until cleared.
    pub(crate) fn fail_on(&self, store: Option<FailingStore>) {
        self.with(|inner| inner.failing = store);
    }

    pub(crate) fn calls(&self) -> Vec<StoreCall> {
        self.with(|inner| inner.calls.clone())
    }

    /// Build the injected store bundle sharing this backend.
    pub(crate) fn stores(&self) -> Stores {
        Stores::from_backend(Arc::new(self.clone()))
    }

    fn with<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let mut guard =
            self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn write(
        &self,
        store: FailingStore,
        call: StoreCall,
    ) -> Result<(), StoreError> {
        self.with(|inner| {
            inner.calls.push(call.clone());
            if inner.failing == Some(store) {
                return Err(StoreError::Io(std::io::Error::other(
                    "write rejected",
                )));
            }

            match call {
                StoreCall::ApiKey(value) => inner.api_key = value,
                StoreCall::Language(code) => inner.language = code,
                StoreCall::Theme(theme) => inner.theme = theme,
            }
            Ok(())
        })
    }
}

impl ApiKeyStore for MemoryStores {
    fn get(&self) -> SecretString {
        SecretString::from(self.with(|inner| inner.api_key.clone()))
    }

    fn set(&self, value: &str) -> Result<(), StoreError> {
        self.write(FailingStore::ApiKey, StoreCall::ApiKey(value.to_owned()))
    }
}

impl LanguageStore for MemoryStores {
    fn get(&self) -> String {
        self.with(|inner| inner.language.clone())
    }

    fn set(&self, code: &str) -> Result<(), StoreError> {
        self.write(
            FailingStore::Language,
            StoreCall::Language(code.to_owned()),
        )
    }
}

impl ThemeStore for MemoryStores {
    fn get(&self) -> ThemeKind {
        self.with(|inner| inner.theme)
    }

    fn set(&self, theme: ThemeKind) -> Result<(), StoreError> {
        self.write(FailingStore::Theme, StoreCall::Theme(theme))
    }
}
