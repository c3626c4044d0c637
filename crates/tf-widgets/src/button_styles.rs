//! Button styling for the channel selector
//!
//! Channel buttons always show their channel color:
//! - Inactive channels: raised button, brighter preset on hover
//! - Active channel: permanent "pressed in" look with a bright border

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::ChannelButtonColors;

/// Shadow offset for raised buttons
const SHADOW_OFFSET: Vector = Vector::new(2.0, 2.0);

/// Shadow blur for raised buttons
const SHADOW_BLUR: f32 = 3.0;

/// Border color marking the active channel
const ACTIVE_BORDER: Color = Color::from_rgb(0.95, 0.95, 0.95);

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

/// Raised 3D button (shadow on bottom-right)
fn raised_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(base_color)),
        text_color: Color::WHITE,
        border: Border {
            color: lighten(base_color, 0.1),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: SHADOW_OFFSET,
            blur_radius: SHADOW_BLUR,
        },
        snap: false,
    }
}

/// Pressed 3D button (reduced shadow, highlighted border)
fn pressed_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(darken(base_color, 0.15))),
        text_color: Color::WHITE,
        border: Border {
            color: ACTIVE_BORDER,
            width: 2.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.5, 0.5),
            blur_radius: 1.0,
        },
        snap: false,
    }
}

fn disabled_style() -> Style {
    Style {
        background: Some(Background::Color(Color::from_rgb(0.2, 0.2, 0.2))),
        text_color: Color::from_rgb(0.5, 0.5, 0.5),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Style function for channel selector buttons
///
/// Use with `.style(move |_theme, status| channel_style(status, is_active, colors))`
pub fn channel_style(status: Status, is_active: bool, colors: ChannelButtonColors) -> Style {
    match (status, is_active) {
        (Status::Disabled, _) => disabled_style(),
        (Status::Pressed, _) => pressed_style(colors.pressed),
        (Status::Hovered, true) => pressed_style(colors.hovered),
        (Status::Hovered, false) => raised_style(colors.hovered),
        (Status::Active, true) => pressed_style(colors.idle),
        (Status::Active, false) => raised_style(colors.idle),
    }
}
