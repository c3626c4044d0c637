//! Draw requests issued by the editor
//!
//! The editor does not know how to rasterize anything. It describes the frame
//! as filled rectangles, line segments, filled circles and an optional
//! tooltip, and the host backend implements [`Painter`] to turn those into
//! pixels.

use crate::channel::{Channel, ChannelStore, NUM_CHANNELS};
use crate::geometry::{CanvasGeometry, Point, Rect};

/// Linear RGBA color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Rgba = Rgba::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Rgba = Rgba::rgb(0.0, 0.0, 1.0);
    pub const GREY: Rgba = Rgba::rgb(0.5, 0.5, 0.5);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside [0, 1].
    pub fn with_alpha(self, alpha: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&alpha),
            "alpha must be within [0, 1], got {}",
            alpha
        );
        Self { a: alpha, ..self }
    }

    /// Color from hue, saturation and value, all in [0, 1]
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        if s == 0.0 {
            return Self::rgb(v, v, v);
        }
        let h = (h.rem_euclid(1.0)) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match sector as u8 {
            0 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }
}

/// Handle fill colors in channel order (R, G, B, A)
pub const HANDLE_COLORS: [Rgba; NUM_CHANNELS] = [Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::GREY];

/// Background frame color
pub const FRAME_COLOR: Rgba = Rgba::new(0.1, 0.1, 0.12, 0.8);
/// Background frame corner radius
pub const FRAME_ROUNDING: f32 = 3.0;

const INACTIVE_LINE_WIDTH: f32 = 1.2;
const ACTIVE_LINE_WIDTH: f32 = 1.5;
const ACTIVE_RADIUS_FACTOR: f32 = 1.35;
const ACTIVE_HANDLE_ALPHA: f32 = 0.6;
const FOCUS_LINE_ALPHA: f32 = 0.6;
const FOCUS_HANDLE_ALPHA: f32 = 0.5;

/// Backend capability for drawing the editor
pub trait Painter {
    /// Filled rectangle with rounded corners
    fn fill_rect(&mut self, rect: Rect, rounding: f32, color: Rgba);

    /// Straight line segment
    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba);

    /// Filled circle
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Text readout anchored at a screen position (usually the pointer)
    fn tooltip(&mut self, anchor: Point, text: &str);
}

/// Draw the frame and all four curves
///
/// Inactive channels go first so the active channel always ends up on top.
/// In focus mode the inactive channels are dimmed.
pub fn draw_channels<P: Painter + ?Sized>(
    painter: &mut P,
    geometry: &CanvasGeometry,
    store: &ChannelStore,
    active: Channel,
    focus_mode: bool,
) {
    painter.fill_rect(geometry.canvas_bounds(), FRAME_ROUNDING, FRAME_COLOR);

    let inactive = || {
        store
            .iter()
            .filter(move |(channel, points)| *channel != active && !points.is_empty())
    };

    // Connectors before handles so lines never cover a handle
    let line_color = if focus_mode {
        Rgba::WHITE.with_alpha(FOCUS_LINE_ALPHA)
    } else {
        Rgba::WHITE
    };
    for (_, points) in inactive() {
        draw_connectors(painter, geometry, points, INACTIVE_LINE_WIDTH, line_color);
    }

    let radius = geometry.handle_radius();
    for (channel, points) in inactive() {
        let (border_color, fill_color) = if focus_mode {
            (
                Rgba::WHITE.with_alpha(FOCUS_HANDLE_ALPHA),
                HANDLE_COLORS[channel.index()].with_alpha(FOCUS_HANDLE_ALPHA),
            )
        } else {
            (Rgba::WHITE, HANDLE_COLORS[channel.index()])
        };
        draw_handles(painter, geometry, points, radius, border_color, fill_color);
    }

    let points = store.points(active);
    let fill_color = HANDLE_COLORS[active.index()].with_alpha(ACTIVE_HANDLE_ALPHA);
    draw_connectors(painter, geometry, points, ACTIVE_LINE_WIDTH, Rgba::WHITE);
    draw_handles(
        painter,
        geometry,
        points,
        radius * ACTIVE_RADIUS_FACTOR,
        Rgba::WHITE,
        fill_color,
    );
}

fn draw_connectors<P: Painter + ?Sized>(
    painter: &mut P,
    geometry: &CanvasGeometry,
    points: &[Point],
    width: f32,
    color: Rgba,
) {
    for pair in points.windows(2) {
        painter.line(
            geometry.to_screen(pair[0]),
            geometry.to_screen(pair[1]),
            width,
            color,
        );
    }
}

/// Two concentric circles per handle: border ring, then fill
fn draw_handles<P: Painter + ?Sized>(
    painter: &mut P,
    geometry: &CanvasGeometry,
    points: &[Point],
    radius: f32,
    border_color: Rgba,
    fill_color: Rgba,
) {
    let border = geometry.handle_border();
    for &point in points {
        let center = geometry.to_screen(point);
        painter.fill_circle(center, radius, border_color);
        painter.fill_circle(center, radius - border, fill_color);
    }
}
