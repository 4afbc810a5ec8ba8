use std::collections::HashMap;

use crate::catalog::DEFAULT_LANGUAGE;

/// Embedded translation tables keyed by language code.
const LOCALES: [(&str, &str); 12] = [
    ("en", include_str!("../assets/locales/en.json")),
    ("tr", include_str!("../assets/locales/tr.json")),
    ("ru", include_str!("../assets/locales/ru.json")),
    ("de", include_str!("../assets/locales/de.json")),
    ("fr", include_str!("../assets/locales/fr.json")),
    ("es", include_str!("../assets/locales/es.json")),
    ("it", include_str!("../assets/locales/it.json")),
    ("pt", include_str!("../assets/locales/pt.json")),
    ("pl", include_str!("../assets/locales/pl.json")),
    ("zh", include_str!("../assets/locales/zh.json")),
    ("ja", include_str!("../assets/locales/ja.json")),
    ("ar", include_str!("../assets/locales/ar.json")),
];

/// Dotted-key lookup of interface strings for one language.
///
/// Missing keys fall back to English, then to the key itself.
#[derive(Debug, Clone)]
pub(crate) struct Translator {
    language: String,
    table: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    pub(crate) fn new(language: &str) -> Self {
        let fallback = load_table(DEFAULT_LANGUAGE);
        let table = if language == DEFAULT_LANGUAGE {
            HashMap::new()
        } else {
            load_table(language)
        };

        Self {
            language: language.to_owned(),
            table,
            fallback,
        }
    }

    /// Return the language this translator renders.
    pub(crate) fn language(&self) -> &str {
        &self.language
    }

    /// Translate `key`, e.g. `settings.apiKey.title`.
    pub(crate) fn t(&self, key: &str) -> String {
        self.table
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}

fn load_table(language: &str) -> HashMap<String, String> {
    let Some((_, source)) = LOCALES.iter().find(|(code, _)| *code == language)
    else {
        log::debug!("no translations for language {language}");
        return HashMap::new();
    };

    let value = match serde_json::from_str::<serde_json::Value>(source) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("translations for {language} are invalid: {err}");
            return HashMap::new();
        },
    };

    let mut table = HashMap::new();
    flatten(&value, String::new(), &mut table);
    table
}

fn flatten(
    value: &serde_json::Value,
    prefix: String,
    table: &mut HashMap<String, String>,
) {
    match value {
        serde_json::Value::Object(entries) => {
            for (key, child) in entries {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, path, table);
            }
        },
        serde_json::Value::String(text) => {
            table.insert(prefix, text.clone());
        },
        _ => {},
    }
}
