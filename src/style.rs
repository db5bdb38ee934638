use iced::widget::{button, container};
use iced::{Border, Color, Theme};
use std::sync::Arc;

// Main theme colors
pub const PRIMARY: Color = Color::from_rgb(0.55, 0.27, 0.51);
pub const BACKGROUND: Color = Color::from_rgb(0.99, 0.96, 0.97);
pub const TEXT: Color = Color::from_rgb(0.16, 0.1, 0.14);
pub const SUCCESS: Color = Color::from_rgb(0.18, 0.55, 0.34);
pub const ERROR: Color = Color::from_rgb(0.75, 0.12, 0.15);

pub fn custom_theme() -> Theme {
    let palette = iced::theme::Palette {
        background: BACKGROUND,
        text: TEXT,
        primary: PRIMARY,
        success: SUCCESS,
        danger: ERROR,
    };

    Theme::Custom(Arc::new(iced::theme::Custom::new(
        "cupcake-light".to_string(),
        palette,
    )))
}

pub fn app_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: Some(palette.primary.weak.text),
        ..container::Style::default()
    }
}

pub fn bordered_box(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 1.0,
            radius: 5.0.into(),
            color: palette.background.strong.color,
        },
        ..container::Style::default()
    }
}

// Style for an option row the user has picked
pub fn option_button_selected(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: palette.primary.weak.text,
        border: Border {
            width: 2.0,
            radius: 5.0.into(),
            color: palette.primary.base.color,
        },
        ..button::Style::default()
    }
}

// Style for an unpicked option row
pub fn option_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let is_hover = matches!(status, button::Status::Hovered);

    button::Style {
        background: Some(
            if is_hover {
                palette.background.strong.color
            } else {
                palette.background.weak.color
            }
            .into(),
        ),
        text_color: palette.background.weak.text,
        border: Border {
            width: 1.0,
            radius: 5.0.into(),
            color: palette.background.strong.color,
        },
        ..button::Style::default()
    }
}
