use std::error::Error;

use super::errors::SettingsError;
use super::model::{API_KEY_URL, SettingsData, SettingsField};
use crate::stores::Stores;

/// Write every draft field to its store, stopping at the first failure.
///
/// Writes are unconditional: unchanged fields are rewritten with the same
/// value.
pub(crate) fn write_settings(
    stores: &Stores,
    draft: &SettingsData,
) -> Result<(), SettingsError> {
    for field in SettingsField::SAVE_ORDER {
        let result = match field {
            SettingsField::ApiKey => stores.api_key.set(draft.api_key()),
            SettingsField::Language => stores.language.set(draft.language()),
            SettingsField::Theme => stores.theme.set(draft.theme()),
        };
        result.map_err(|source| SettingsError::StoreWrite { field, source })?;
    }

    Ok(())
}

/// Write the draft and render a failure as a user-facing message.
///
/// Runs inside the save task; the error string is what the form shows.
pub(crate) fn commit(
    stores: &Stores,
    draft: &SettingsData,
) -> Result<(), String> {
    write_settings(stores, draft).map_err(|err| error_chain(&err))
}

/// Open the API key page in the system browser.
pub(crate) fn open_api_key_page() {
    if let Err(err) = open::that_detached(API_KEY_URL) {
        log::warn!("failed to open {API_KEY_URL}: {err}");
    }
}

/// Render an error with its source chain, outermost first.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::{commit, error_chain, write_settings};
    use crate::catalog::ThemeKind;
    use crate::stores::memory::{FailingStore, MemoryStores, StoreCall};
    use crate::widgets::settings::errors::SettingsError;
    use crate::widgets::settings::model::{SettingsData, SettingsField};

    #[test]
    fn given_api_key_edit_when_written_then_all_stores_set_in_order() {
        let backend = MemoryStores::new("", "en", ThemeKind::Dark);
        let stores = backend.stores();
        let draft = SettingsData::new(
            String::from("sk-123"),
            String::from("en"),
            ThemeKind::Dark,
        );

        write_settings(&stores, &draft).expect("writes should succeed");

        assert_eq!(
            backend.calls(),
            vec![
                StoreCall::ApiKey(String::from("sk-123")),
                StoreCall::Language(String::from("en")),
                StoreCall::Theme(ThemeKind::Dark),
            ]
        );
        assert_eq!(stores.snapshot(), draft);
    }

    #[test]
    fn given_failing_language_store_when_written_then_stops_with_field() {
        let backend = MemoryStores::new("", "en", ThemeKind::Dark);
        backend.fail_on(Some(FailingStore::Language));
        let stores = backend.stores();
        let draft = SettingsData::new(
            String::from("sk-123"),
            String::from("de"),
            ThemeKind::Fun,
        );

        let result = write_settings(&stores, &draft);

        assert!(matches!(
            result,
            Err(SettingsError::StoreWrite {
                field: SettingsField::Language,
                ..
            })
        ));
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(stores.snapshot().api_key(), "sk-123");
        assert_eq!(stores.snapshot().theme(), ThemeKind::Dark);
    }

    #[test]
    fn given_store_write_error_when_error_chain_then_includes_cause() {
        let backend = MemoryStores::new("", "en", ThemeKind::Dark);
        backend.fail_on(Some(FailingStore::Theme));
        let stores = backend.stores();

        let err = write_settings(&stores, &SettingsData::default())
            .expect_err("theme write should fail");

        assert_eq!(
            error_chain(&err),
            "failed to save theme: preferences IO failed: write rejected"
        );
    }

    #[test]
    fn given_failing_language_store_when_committed_then_key_stays_written() {
        let backend = MemoryStores::new("", "en", ThemeKind::Dark);
        backend.fail_on(Some(FailingStore::Language));
        let stores = backend.stores();
        let draft = SettingsData::new(
            String::from("sk-123"),
            String::from("de"),
            ThemeKind::Light,
        );

        let message =
            commit(&stores, &draft).expect_err("language write should fail");

        assert_eq!(
            message,
            "failed to save language: preferences IO failed: write rejected"
        );
        let committed = stores.snapshot();
        assert_eq!(committed.api_key(), "sk-123");
        assert_eq!(committed.language(), "en");
        assert_eq!(committed.theme(), ThemeKind::Dark);
    }

    #[test]
    fn given_working_stores_when_committed_then_snapshot_matches_draft() {
        let backend = MemoryStores::new("", "en", ThemeKind::Dark);
        let stores = backend.stores();
        let draft = SettingsData::new(
            String::from("sk-123"),
            String::from("ja"),
            ThemeKind::Fun,
        );

        commit(&stores, &draft).expect("commit should succeed");

        assert_eq!(stores.snapshot(), draft);
    }
}
