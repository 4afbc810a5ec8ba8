use std::fmt;

use serde::{Deserialize, Serialize};

/// Language code used when nothing else is configured.
pub(crate) const DEFAULT_LANGUAGE: &str = "en";

/// Display metadata for a selectable interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LanguageEntry {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) flag: &'static str,
}

/// Languages offered by the settings screen, in display order.
pub(crate) static LANGUAGES: [LanguageEntry; 12] = [
    LanguageEntry { code: "en", name: "English", flag: "🇺🇸" },
    LanguageEntry { code: "tr", name: "Türkçe", flag: "🇹🇷" },
    LanguageEntry { code: "ru", name: "Русский", flag: "🇷🇺" },
    LanguageEntry { code: "de", name: "Deutsch", flag: "🇩🇪" },
    LanguageEntry { code: "fr", name: "Français", flag: "🇫🇷" },
    LanguageEntry { code: "es", name: "Español", flag: "🇪🇸" },
    LanguageEntry { code: "it", name: "Italiano", flag: "🇮🇹" },
    LanguageEntry { code: "pt", name: "Português", flag: "🇵🇹" },
    LanguageEntry { code: "pl", name: "Polski", flag: "🇵🇱" },
    LanguageEntry { code: "zh", name: "中文", flag: "🇨🇳" },
    LanguageEntry { code: "ja", name: "日本語", flag: "🇯🇵" },
    LanguageEntry { code: "ar", name: "العربية", flag: "🇸🇦" },
];

/// Look up catalog metadata for a language code.
pub(crate) fn language(code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.code == code)
}

/// Return the language that follows `code` in the catalog, wrapping around.
///
/// Unknown codes start over from the first entry.
pub(crate) fn next_language(code: &str) -> &'static LanguageEntry {
    let next = LANGUAGES
        .iter()
        .position(|entry| entry.code == code)
        .map_or(0, |index| (index + 1) % LANGUAGES.len());
    &LANGUAGES[next]
}

/// Visual themes the application can render with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ThemeKind {
    #[default]
    Dark,
    Light,
    Gradient,
    Corporate,
    Fun,
    HighContrast,
}

impl ThemeKind {
    /// All themes, in display order.
    pub(crate) const ALL: [ThemeKind; 6] = [
        ThemeKind::Dark,
        ThemeKind::Light,
        ThemeKind::Gradient,
        ThemeKind::Corporate,
        ThemeKind::Fun,
        ThemeKind::HighContrast,
    ];

    /// Stable tag used in persisted preferences and translation keys.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Gradient => "gradient",
            ThemeKind::Corporate => "corporate",
            ThemeKind::Fun => "fun",
            ThemeKind::HighContrast => "high-contrast",
        }
    }

    /// Swatch colors as `[background, primary, accent]` hex strings.
    pub(crate) fn swatch(self) -> [&'static str; 3] {
        match self {
            ThemeKind::Dark => ["#0A101F", "#0284c7", "#0891b2"],
            ThemeKind::Light => ["#FFFFFF", "#3b82f6", "#d1d5db"],
            ThemeKind::Gradient => ["#a855f7", "#ec4899", "#f97316"],
            ThemeKind::Corporate => ["#FFFFFF", "#1e3a8a", "#64748b"],
            ThemeKind::Fun => ["#fef3c7", "#22d3ee", "#f472b6"],
            ThemeKind::HighContrast => ["#000000", "#FFFF00", "#FFFFFF"],
        }
    }

    /// Translation key of the theme's display label.
    pub(crate) fn label_key(self) -> String {
        format!("settings.themes.{}", self.tag())
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
