use iced::theme::Palette;
use iced::{Color, Theme};

use crate::catalog::ThemeKind;

const DANGER_HEX: &str = "#E06C75";
const WARNING_HEX: &str = "#E5C07B";
const LIGHT_TEXT_HEX: &str = "#F8FAFC";
const DARK_TEXT_HEX: &str = "#111827";

/// Resolved iced colors for one theme.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
    pub(crate) primary: Color,
    pub(crate) accent: Color,
    pub(crate) danger: Color,
    pub(crate) warning: Color,
}

impl From<ThemeKind> for IcedColorPalette {
    fn from(kind: ThemeKind) -> Self {
        let [background, primary, accent] = kind.swatch().map(hex_or_black);
        let foreground = if luminance(background) > 0.5 {
            hex_or_black(DARK_TEXT_HEX)
        } else {
            hex_or_black(LIGHT_TEXT_HEX)
        };

        Self {
            background,
            foreground,
            dim_foreground: mix(background, foreground, 0.6),
            overlay: mix(background, foreground, 0.08),
            primary,
            accent,
            danger: hex_or_black(DANGER_HEX),
            warning: hex_or_black(WARNING_HEX),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    kind: ThemeKind,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn new(kind: ThemeKind) -> Self {
        Self {
            kind,
            iced_palette: IcedColorPalette::from(kind),
        }
    }

    pub(crate) fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.primary,
            success: palette.accent,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.kind.tag().to_string(), palette)
    }
}

/// Theme props passed through App -> Widget -> View.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the theme the application currently renders with.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(kind: ThemeKind) -> Self {
        Self {
            current: AppTheme::new(kind),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Switch to `kind`; a no-op when it is already active.
    pub(crate) fn set_theme(&mut self, kind: ThemeKind) {
        if self.current.kind() != kind {
            self.current = AppTheme::new(kind);
        }
    }
}

/// Parse a `#RRGGBB` color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    if !is_valid_hex_color(value) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&value[range], 16).ok()
    };
    Some(Color::from_rgb8(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

pub(crate) fn is_valid_hex_color(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('#') || value.len() != 7 {
        return false;
    }
    chars.all(|ch| ch.is_ascii_hexdigit())
}

fn hex_or_black(value: &str) -> Color {
    parse_hex_color(value).unwrap_or(Color::BLACK)
}

fn luminance(color: Color) -> f32 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

fn mix(from: Color, to: Color, amount: f32) -> Color {
    let lerp = |a: f32, b: f32| a + (b - a) * amount;
    Color::from_rgb(lerp(from.r, to.r), lerp(from.g, to.g), lerp(from.b, to.b))
}
