//! Preview of the sampled lookup table
//!
//! Draws each channel of the dense table as a polyline, one point per domain
//! step, so quantisation at small domain sizes is visible.

use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, Color, Point, Rectangle, Theme};
use tf_core::{Channel, SampledTable, HANDLE_COLORS};
use tf_widgets::to_color;

/// Height of the preview strip
pub const PREVIEW_HEIGHT: f32 = 120.0;

const BACKGROUND: Color = Color::from_rgb(0.08, 0.08, 0.1);

/// Canvas program drawing a `SampledTable`
pub struct TablePreview<'a> {
    pub table: &'a SampledTable,
}

impl<Message> Program<Message> for TablePreview<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        let steps = self.table.domain();
        if steps == 0 {
            return vec![frame.into_geometry()];
        }

        // Last step sits on the right edge
        let dx = bounds.width / (steps.max(2) - 1) as f32;
        let height = bounds.height;

        for channel in Channel::ALL {
            let path = Path::new(|builder| {
                for (step, value) in self.table.channel(channel).enumerate() {
                    let point = Point::new(step as f32 * dx, height * (1.0 - value));
                    if step == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(to_color(HANDLE_COLORS[channel.index()]))
                    .with_width(1.0),
            );
        }

        vec![frame.into_geometry()]
    }
}
