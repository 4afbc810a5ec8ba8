use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, container, row, svg, text};
use iced::{Element, Length, Theme, alignment};

use super::super::event::ChromeEvent;
use crate::catalog::LanguageEntry;
use crate::icons::SETTINGS;
use crate::theme::{IcedColorPalette, ThemeProps};

pub(crate) const ACTION_BAR_HEIGHT: f32 = 44.0;
const ACTION_BAR_TITLE_SIZE: f32 = 16.0;
const ACTION_BAR_LABEL_SIZE: f32 = 13.0;
const ACTION_BAR_ICON_SIZE: f32 = 16.0;
const ACTION_BAR_BUTTON_HEIGHT: f32 = 30.0;
const ACTION_BAR_HORIZONTAL_PADDING: f32 = 12.0;
const ACTION_BAR_CONTROLS_SPACING: f32 = 8.0;

/// Props for rendering the action bar.
#[derive(Debug, Clone)]
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: String,
    pub(crate) settings_label: String,
    pub(crate) language_label: String,
    pub(crate) language: &'static LanguageEntry,
    pub(crate) is_settings_open: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the header with the title and the screen controls.
pub(crate) fn view<'a>(
    props: ActionBarProps<'a>,
) -> Element<'a, ChromeEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.overlay;
    let foreground = palette.foreground;

    let title = text(props.title).size(ACTION_BAR_TITLE_SIZE);

    let language_button = bar_button(
        row![
            text(props.language.flag).size(ACTION_BAR_LABEL_SIZE),
            text(props.language_label).size(ACTION_BAR_LABEL_SIZE),
        ]
        .spacing(6.0)
        .align_y(alignment::Vertical::Center)
        .into(),
        ChromeEvent::CycleLanguage,
        false,
        palette,
    );

    let settings_icon = svg::Svg::new(svg::Handle::from_memory(SETTINGS))
        .width(Length::Fixed(ACTION_BAR_ICON_SIZE))
        .height(Length::Fixed(ACTION_BAR_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(foreground),
        });
    let settings_button = bar_button(
        row![
            settings_icon,
            text(props.settings_label).size(ACTION_BAR_LABEL_SIZE),
        ]
        .spacing(6.0)
        .align_y(alignment::Vertical::Center)
        .into(),
        ChromeEvent::ToggleSettings,
        props.is_settings_open,
        palette,
    );

    let content = row![
        title,
        Space::new().width(Length::Fill),
        language_button,
        settings_button,
    ]
    .spacing(ACTION_BAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING])
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn bar_button<'a>(
    content: Element<'a, ChromeEvent, Theme, iced::Renderer>,
    event: ChromeEvent,
    active: bool,
    palette: &IcedColorPalette,
) -> Element<'a, ChromeEvent, Theme, iced::Renderer> {
    let palette = palette.clone();

    button(
        container(content)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(ACTION_BAR_BUTTON_HEIGHT))
    .padding([0.0, 10.0])
    .on_press(event)
    .style(move |_, status| bar_button_style(&palette, status, active))
    .into()
}

fn bar_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    active: bool,
) -> iced::widget::button::Style {
    let background = match (active, status) {
        (true, _) => Some(palette.primary.into()),
        (false, ButtonStatus::Hovered | ButtonStatus::Pressed) => {
            let mut color = palette.dim_foreground;
            color.a = 0.2;
            Some(color.into())
        },
        (false, _) => None,
    };
    let text_color = if active {
        palette.background
    } else {
        palette.foreground
    };

    iced::widget::button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: iced::border::Radius::from(6.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
