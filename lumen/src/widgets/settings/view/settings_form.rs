use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Row, Space, button, column, container, row, scrollable, svg, text,
    text_input,
};
use iced::{Color, Element, Length, Theme, alignment};

use crate::catalog::{LANGUAGES, LanguageEntry, ThemeKind};
use crate::i18n::Translator;
use crate::icons;
use crate::theme::{IcedColorPalette, ThemeProps, parse_hex_color};
use crate::widgets::settings::event::SettingsEvent;
use crate::widgets::settings::model::{
    API_KEY_URL, SavePhase, SettingsViewModel,
};

const PAGE_PADDING: f32 = 24.0;
const PAGE_SPACING: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 26.0;

const CARD_PADDING: f32 = 16.0;
const CARD_SPACING: f32 = 12.0;
const CARD_RADIUS: f32 = 8.0;
const CARD_TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 13.0;

const ICON_SIZE: f32 = 18.0;
const INPUT_PADDING_X: f32 = 10.0;
const INPUT_PADDING_Y: f32 = 8.0;

const LANGUAGE_COLUMNS: usize = 4;
const LANGUAGE_BUTTON_WIDTH: f32 = 150.0;
const LANGUAGE_BUTTON_HEIGHT: f32 = 34.0;

const THEME_COLUMNS: usize = 3;
const THEME_SWATCH_WIDTH: f32 = 180.0;
const THEME_SWATCH_HEIGHT: f32 = 64.0;
const THEME_DOT_SIZE: f32 = 22.0;
const THEME_BORDER_WIDTH: f32 = 2.0;

const ACTION_BUTTON_HEIGHT: f32 = 34.0;
const ACTION_BUTTON_WIDTH: f32 = 180.0;
const ACTION_BUTTON_PADDING_X: f32 = 14.0;
const GRID_SPACING: f32 = 10.0;

/// Props for the settings form view.
pub(crate) struct SettingsFormProps<'a> {
    pub(crate) vm: SettingsViewModel<'a>,
    pub(crate) translator: &'a Translator,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the full settings page.
pub(crate) fn view(
    props: SettingsFormProps<'_>,
) -> Element<'_, SettingsEvent, Theme, iced::Renderer> {
    let t = props.translator;
    let title = text(t.t("settings.title")).size(TITLE_FONT_SIZE);

    let content = column![
        title,
        api_key_card(&props),
        language_card(&props),
        theme_card(&props),
        actions_row(&props),
    ]
    .spacing(PAGE_SPACING)
    .padding(PAGE_PADDING)
    .width(Length::Fill);

    scrollable::Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn is_editable(props: &SettingsFormProps<'_>) -> bool {
    props.vm.phase != SavePhase::Saving
}

fn api_key_card<'a>(
    props: &SettingsFormProps<'a>,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let t = props.translator;
    let palette = props.theme.theme.iced_palette();

    let heading = row![
        svg_icon(icons::KEY, palette.primary),
        text(t.t("settings.apiKey.title")).size(CARD_TITLE_FONT_SIZE),
    ]
    .spacing(8.0)
    .align_y(alignment::Vertical::Center);

    let mut input = text_input(
        &t.t("settings.apiKey.placeholder"),
        props.vm.draft.api_key(),
    )
    .secure(!props.vm.is_key_visible)
    .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
    .size(BODY_FONT_SIZE)
    .width(Length::Fill);
    if is_editable(props) {
        input = input.on_input(SettingsEvent::ApiKeyChanged);
    }

    let (visibility_icon, visibility_label) = if props.vm.is_key_visible {
        (icons::EYE_OFF, t.t("settings.apiKey.hide"))
    } else {
        (icons::EYE, t.t("settings.apiKey.show"))
    };
    let toggle_palette = palette.clone();
    let toggle = button(
        row![
            svg_icon(visibility_icon, palette.dim_foreground),
            text(visibility_label).size(BODY_FONT_SIZE),
        ]
        .spacing(6.0)
        .align_y(alignment::Vertical::Center),
    )
    .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
    .on_press(SettingsEvent::ToggleKeyVisibility)
    .style(move |_, status| {
        chip_style(&toggle_palette, status, false, true)
    });

    let input_row = row![input, toggle]
        .spacing(8.0)
        .align_y(alignment::Vertical::Center);

    let link_color = palette.primary;
    let link = button(
        text(format!("{}: {API_KEY_URL}", t.t("settings.apiKey.getLink")))
            .size(BODY_FONT_SIZE),
    )
    .padding(0.0)
    .on_press(SettingsEvent::OpenApiKeyLink)
    .style(move |_, status| link_style(link_color, status));

    card(
        column![
            heading,
            muted(t.t("settings.apiKey.description"), palette),
            text(t.t("settings.apiKey.yourKey")).size(BODY_FONT_SIZE),
            input_row,
            link,
        ]
        .spacing(CARD_SPACING),
        palette,
    )
}

fn language_card<'a>(
    props: &SettingsFormProps<'a>,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let t = props.translator;
    let palette = props.theme.theme.iced_palette();

    let mut grid = Column::new().spacing(GRID_SPACING);
    for chunk in LANGUAGES.chunks(LANGUAGE_COLUMNS) {
        let mut line = Row::new().spacing(GRID_SPACING);
        for entry in chunk {
            line = line.push(language_button(props, entry));
        }
        grid = grid.push(line);
    }

    card(
        column![
            text(t.t("settings.language.title")).size(CARD_TITLE_FONT_SIZE),
            muted(t.t("settings.language.description"), palette),
            grid,
        ]
        .spacing(CARD_SPACING),
        palette,
    )
}

fn language_button<'a>(
    props: &SettingsFormProps<'a>,
    entry: &'static LanguageEntry,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let selected = props.vm.draft.language() == entry.code;
    let enabled = is_editable(props);

    let label = text(format!("{} {}", entry.flag, entry.name))
        .size(BODY_FONT_SIZE)
        .wrapping(Wrapping::None);

    button(
        container(label)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(LANGUAGE_BUTTON_WIDTH))
    .height(Length::Fixed(LANGUAGE_BUTTON_HEIGHT))
    .padding([0.0, INPUT_PADDING_X])
    .on_press_maybe(
        enabled
            .then(|| SettingsEvent::LanguageSelected(entry.code.to_string())),
    )
    .style(move |_, status| chip_style(&palette, status, selected, enabled))
    .into()
}

fn theme_card<'a>(
    props: &SettingsFormProps<'a>,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let t = props.translator;
    let palette = props.theme.theme.iced_palette();

    let mut grid = Column::new().spacing(GRID_SPACING);
    for chunk in ThemeKind::ALL.chunks(THEME_COLUMNS) {
        let mut line = Row::new().spacing(GRID_SPACING);
        for kind in chunk {
            line = line.push(theme_tile(props, *kind));
        }
        grid = grid.push(line);
    }

    card(
        column![
            text(t.t("settings.themes.title")).size(CARD_TITLE_FONT_SIZE),
            muted(t.t("settings.themes.description"), palette),
            grid,
        ]
        .spacing(CARD_SPACING),
        palette,
    )
}

fn theme_tile<'a>(
    props: &SettingsFormProps<'a>,
    kind: ThemeKind,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let selected = props.vm.draft.theme() == kind;
    let [background, primary, accent] =
        kind.swatch().map(|hex| parse_hex_color(hex).unwrap_or(Color::BLACK));

    let preview = container(
        row![swatch_dot(primary), swatch_dot(accent)]
            .spacing(8.0)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(background.into()),
        border: iced::Border {
            radius: iced::border::Radius::from(6.0),
            ..Default::default()
        },
        ..Default::default()
    });

    let border_color = if selected {
        palette.primary
    } else {
        palette.overlay
    };
    let tile = button(preview)
        .width(Length::Fixed(THEME_SWATCH_WIDTH))
        .height(Length::Fixed(THEME_SWATCH_HEIGHT))
        .padding(4.0)
        .on_press_maybe(
            is_editable(props).then_some(SettingsEvent::ThemeSelected(kind)),
        )
        .style(move |_, _| iced::widget::button::Style {
            background: None,
            border: iced::Border {
                width: THEME_BORDER_WIDTH,
                color: border_color,
                radius: iced::border::Radius::from(CARD_RADIUS),
            },
            ..Default::default()
        });

    let label = muted(props.translator.t(&kind.label_key()), palette);

    column![tile, label]
        .spacing(6.0)
        .width(Length::Fixed(THEME_SWATCH_WIDTH))
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn swatch_dot<'a>(
    color: Color,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fixed(THEME_DOT_SIZE))
        .height(Length::Fixed(THEME_DOT_SIZE))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: iced::Border {
                radius: iced::border::Radius::from(THEME_DOT_SIZE / 2.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn actions_row<'a>(
    props: &SettingsFormProps<'a>,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let t = props.translator;
    let palette = props.theme.theme.iced_palette();

    let status: Element<'a, SettingsEvent, Theme, iced::Renderer> =
        match props.vm.last_error {
            Some(message) => {
                let color = palette.danger;
                text(format!("{}: {message}", t.t("settings.saveFailed")))
                    .size(BODY_FONT_SIZE)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(color),
                    })
                    .into()
            },
            None => Space::new().into(),
        };

    let save_label = if props.vm.phase == SavePhase::Saving {
        t.t("settings.saving")
    } else {
        t.t("settings.saveChanges")
    };
    let can_discard = props.vm.phase == SavePhase::Dirty;

    row![
        container(status).width(Length::Fill),
        action_button(
            t.t("settings.discard"),
            can_discard,
            SettingsEvent::Discard,
            palette,
        ),
        action_button(save_label, props.vm.can_save, SettingsEvent::Save, palette),
    ]
    .spacing(GRID_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn card<'a>(
    content: Column<'a, SettingsEvent, Theme, iced::Renderer>,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let background = palette.overlay;
    let foreground = palette.foreground;
    let mut border = palette.dim_foreground;
    border.a = 0.25;

    container(content)
        .width(Length::Fill)
        .padding(CARD_PADDING)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: iced::Border {
                width: 1.0,
                color: border,
                radius: iced::border::Radius::from(CARD_RADIUS),
            },
            ..Default::default()
        })
        .into()
}

fn muted<'a>(
    label: String,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let color = palette.dim_foreground;
    text(label)
        .size(BODY_FONT_SIZE)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
        .into()
}

fn action_button<'a>(
    label: String,
    enabled: bool,
    event: SettingsEvent,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let palette = palette.clone();
    let content = container(
        text(label).size(BODY_FONT_SIZE).wrapping(Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(content)
        .padding([0.0, ACTION_BUTTON_PADDING_X])
        .width(Length::Fixed(ACTION_BUTTON_WIDTH))
        .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
        .on_press_maybe(enabled.then_some(event))
        .style(move |_, status| action_button_style(&palette, status, enabled))
        .into()
}

fn action_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    enabled: bool,
) -> iced::widget::button::Style {
    let background = if enabled {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => palette.accent,
            _ => palette.primary,
        }
    } else {
        let mut color = palette.overlay;
        color.a = 0.4;
        color
    };

    let text_color = if enabled {
        palette.background
    } else {
        palette.dim_foreground
    };

    iced::widget::button::Style {
        background: Some(background.into()),
        text_color,
        border: iced::Border {
            radius: iced::border::Radius::from(6.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn link_style(
    color: Color,
    status: ButtonStatus,
) -> iced::widget::button::Style {
    let mut text_color = color;
    if matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed) {
        text_color.a = 0.75;
    }

    iced::widget::button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

fn chip_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    selected: bool,
    enabled: bool,
) -> iced::widget::button::Style {
    let (background, text_color) = if selected {
        (palette.primary, palette.background)
    } else {
        let mut color = palette.dim_foreground;
        color.a = match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed if enabled => 0.3,
            _ => 0.15,
        };
        (color, palette.foreground)
    };

    iced::widget::button::Style {
        background: Some(background.into()),
        text_color,
        border: iced::Border {
            radius: iced::border::Radius::from(6.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn svg_icon<'a>(
    icon: &'static [u8],
    color: Color,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let handle = svg::Handle::from_memory(icon);
    svg::Svg::new(handle)
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}
