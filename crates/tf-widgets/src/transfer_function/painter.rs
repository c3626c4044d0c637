//! `Painter` implementation on top of an iced canvas frame

use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{Point, Size};
use tf_core::{Painter, Rect, Rgba};

use crate::theme::{to_color, to_point, TOOLTIP_BG, TOOLTIP_SIZE, TOOLTIP_TEXT};

/// Offset of the tooltip box from the pointer
const TOOLTIP_OFFSET: (f32, f32) = (14.0, -22.0);
const TOOLTIP_PADDING: f32 = 4.0;
/// Rough glyph width relative to font size, for sizing the tooltip box
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Forwards editor draw requests to a canvas `Frame`
pub struct FramePainter<'f> {
    frame: &'f mut Frame,
}

impl<'f> FramePainter<'f> {
    pub fn new(frame: &'f mut Frame) -> Self {
        Self { frame }
    }
}

impl Painter for FramePainter<'_> {
    fn fill_rect(&mut self, rect: Rect, rounding: f32, color: Rgba) {
        let path = Path::rounded_rectangle(
            to_point(rect.min),
            Size::new(rect.width(), rect.height()),
            rounding.into(),
        );
        self.frame.fill(&path, to_color(color));
    }

    fn line(&mut self, from: tf_core::Point, to: tf_core::Point, width: f32, color: Rgba) {
        self.frame.stroke(
            &Path::line(to_point(from), to_point(to)),
            Stroke::default().with_color(to_color(color)).with_width(width),
        );
    }

    fn fill_circle(&mut self, center: tf_core::Point, radius: f32, color: Rgba) {
        self.frame
            .fill(&Path::circle(to_point(center), radius), to_color(color));
    }

    fn tooltip(&mut self, anchor: tf_core::Point, text: &str) {
        let box_width =
            text.chars().count() as f32 * TOOLTIP_SIZE * GLYPH_WIDTH_RATIO + 2.0 * TOOLTIP_PADDING;
        let box_height = TOOLTIP_SIZE + 2.0 * TOOLTIP_PADDING;

        // Keep the box inside the frame
        let x = (anchor.x + TOOLTIP_OFFSET.0)
            .min(self.frame.width() - box_width)
            .max(0.0);
        let y = (anchor.y + TOOLTIP_OFFSET.1)
            .min(self.frame.height() - box_height)
            .max(0.0);

        self.frame.fill(
            &Path::rounded_rectangle(
                Point::new(x, y),
                Size::new(box_width, box_height),
                3.0.into(),
            ),
            TOOLTIP_BG,
        );
        self.frame.fill_text(Text {
            content: text.to_string(),
            position: Point::new(x + TOOLTIP_PADDING, y + TOOLTIP_PADDING),
            size: TOOLTIP_SIZE.into(),
            color: TOOLTIP_TEXT,
            ..Text::default()
        });
    }
}
