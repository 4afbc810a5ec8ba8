use thiserror::Error;

use super::model::SettingsField;
use crate::stores::StoreError;

/// Errors emitted while editing or saving settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// A field received a value of the wrong type.
    #[error("invalid update for {field}: got a {found} value")]
    InvalidFieldUpdate {
        field: SettingsField,
        found: &'static str,
    },
    /// Writing one field to its store failed.
    #[error("failed to save {field}")]
    StoreWrite {
        field: SettingsField,
        #[source]
        source: StoreError,
    },
}
