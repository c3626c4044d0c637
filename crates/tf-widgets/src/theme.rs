//! Shared theme constants for transfer function widgets
//!
//! Channel colors and conversions from `tf-core` colors to iced colors.

use iced::Color;
use tf_core::{Channel, Rgba, NUM_CHANNELS};

/// Hue of each channel selector button (R, G, B); alpha is a neutral grey
const CHANNEL_HUES: [Option<f32>; NUM_CHANNELS] = [Some(0.0), Some(0.33), Some(0.67), None];

/// Saturation/value of the idle, hovered and pressed button presets
const IDLE_LEVEL: f32 = 0.6;
const HOVERED_LEVEL: f32 = 0.7;
const PRESSED_LEVEL: f32 = 0.8;

/// Tooltip background
pub const TOOLTIP_BG: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.75);

/// Tooltip text
pub const TOOLTIP_TEXT: Color = Color::from_rgb(0.9, 0.9, 0.9);

/// Tooltip font size
pub const TOOLTIP_SIZE: f32 = 13.0;

/// Button colors of one channel selector, per interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelButtonColors {
    pub idle: Color,
    pub hovered: Color,
    pub pressed: Color,
}

/// HSV presets for a channel's selector button
pub fn channel_button_colors(channel: Channel) -> ChannelButtonColors {
    let hue = CHANNEL_HUES[channel.index()];
    let preset = |level: f32| {
        let saturation = if hue.is_some() { level } else { 0.0 };
        to_color(Rgba::from_hsv(hue.unwrap_or(0.0), saturation, level))
    };
    ChannelButtonColors {
        idle: preset(IDLE_LEVEL),
        hovered: preset(HOVERED_LEVEL),
        pressed: preset(PRESSED_LEVEL),
    }
}

/// Convert a `tf-core` color to an iced color
pub fn to_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Convert a `tf-core` point to an iced point
pub fn to_point(point: tf_core::Point) -> iced::Point {
    iced::Point::new(point.x, point.y)
}

/// Convert an iced point to a `tf-core` point
pub fn from_point(point: iced::Point) -> tf_core::Point {
    tf_core::Point::new(point.x, point.y)
}
