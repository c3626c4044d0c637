//! Transfer function editor state and per-frame gesture handling
//!
//! ## Gestures
//!
//! | Input                                   | Effect                                 |
//! |-----------------------------------------|----------------------------------------|
//! | click near an active-channel handle     | capture it                             |
//! | primary drag while captured             | move it (clamped between neighbours)   |
//! | secondary click while captured          | delete it (unless it is the last one)  |
//! | secondary click on empty canvas         | insert a point at the pointer          |
//! | primary click near another channel      | make that channel active               |
//! | any button release                      | drop the capture                       |
//!
//! Only the active channel is ever mutated. In focus mode clicks on other
//! channels are ignored.

use std::path::{Path, PathBuf};

use crate::channel::{Channel, ChannelStore, ControlPoint};
use crate::config::{EditorConfig, InsertReport, DEFAULT_DOMAIN_SIZE};
use crate::error::{TfResult, TransferFunctionError};
use crate::export;
use crate::geometry::{CanvasGeometry, Point};
use crate::hit_test::{nearest_handle, Hit};
use crate::input::FrameInput;
use crate::render::{draw_channels, Painter};
use crate::sampler::{sample, SampledTable};

/// Coordinate readout for a handle within reach of the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Screen position the readout is anchored at
    pub anchor: Point,
    pub text: String,
}

/// Interactive RGBA transfer function
#[derive(Debug, Clone)]
pub struct TransferFunctionEditor {
    channels: ChannelStore,
    geometry: CanvasGeometry,
    domain_size: usize,
    active: Channel,
    /// Index of the captured handle in the active channel
    captured: Option<usize>,
    focus_mode: bool,
    insert_report: InsertReport,
}

impl Default for TransferFunctionEditor {
    fn default() -> Self {
        Self {
            channels: ChannelStore::default(),
            geometry: CanvasGeometry::default(),
            domain_size: DEFAULT_DOMAIN_SIZE,
            active: Channel::Alpha,
            captured: None,
            focus_mode: false,
            insert_report: InsertReport::Always,
        }
    }
}

impl TransferFunctionEditor {
    /// Create an editor over `domain_size` samples with a `width` x `height` canvas
    pub fn new(domain_size: usize, width: f32, height: f32) -> TfResult<Self> {
        if domain_size == 0 {
            return Err(TransferFunctionError::InvalidDomainSize(domain_size));
        }
        let geometry = CanvasGeometry::new(width, height, crate::geometry::DEFAULT_SCALING)?;
        Ok(Self {
            domain_size,
            geometry,
            ..Self::default()
        })
    }

    /// Create an editor from configuration
    pub fn from_config(config: &EditorConfig) -> TfResult<Self> {
        if config.domain_size == 0 {
            return Err(TransferFunctionError::InvalidDomainSize(config.domain_size));
        }
        Ok(Self {
            channels: ChannelStore::new(config.max_handles)?,
            geometry: CanvasGeometry::new(config.width, config.height, config.scaling)?,
            domain_size: config.domain_size,
            focus_mode: config.focus_mode,
            insert_report: config.insert_report,
            ..Self::default()
        })
    }

    /// Replace the control points (e.g. for hosts that build curves in code)
    pub fn with_channels(mut self, channels: ChannelStore) -> Self {
        self.channels = channels;
        self.captured = None;
        self
    }

    pub fn with_insert_report(mut self, insert_report: InsertReport) -> Self {
        self.insert_report = insert_report;
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn channels(&self) -> &ChannelStore {
        &self.channels
    }

    pub fn channel_points(&self, channel: Channel) -> &[ControlPoint] {
        self.channels.points(channel)
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut CanvasGeometry {
        &mut self.geometry
    }

    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    pub fn active_channel(&self) -> Channel {
        self.active
    }

    pub fn captured_handle(&self) -> Option<usize> {
        self.captured
    }

    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    // ─────────────────────────────────────────────────────────────────────
    // Setters
    // ─────────────────────────────────────────────────────────────────────

    /// Change the sample count; control points are untouched
    pub fn set_domain_size(&mut self, domain_size: usize) -> TfResult<()> {
        if domain_size == 0 {
            return Err(TransferFunctionError::InvalidDomainSize(domain_size));
        }
        self.domain_size = domain_size;
        Ok(())
    }

    /// Make `channel` the active one, dropping any capture
    pub fn set_active_channel(&mut self, channel: Channel) {
        if channel != self.active {
            log::debug!("tf-editor: active channel {} -> {}", self.active, channel);
        }
        self.active = channel;
        self.captured = None;
    }

    pub fn set_focus_mode(&mut self, focus_mode: bool) {
        self.focus_mode = focus_mode;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Frame entry points
    // ─────────────────────────────────────────────────────────────────────

    /// Draw the editor and process this frame's input
    ///
    /// Returns true if the transfer function changed.
    pub fn show<P: Painter + ?Sized>(&mut self, input: &FrameInput, painter: &mut P) -> bool {
        let changed = self.handle_input(input);
        let pointer = (input.hovered || self.is_captured()).then_some(input.pointer);
        self.draw(painter, pointer);
        changed
    }

    /// Draw the curves, plus a tooltip if `pointer` (screen space) is near a handle
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P, pointer: Option<Point>) {
        draw_channels(
            painter,
            &self.geometry,
            &self.channels,
            self.active,
            self.focus_mode,
        );
        if let Some(tooltip) = pointer.and_then(|p| self.tooltip(p)) {
            painter.tooltip(tooltip.anchor, &tooltip.text);
        }
    }

    /// Handle reachable from a screen-space pointer position, if any
    pub fn hover(&self, pointer: Point) -> Option<Hit> {
        nearest_handle(
            &self.channels,
            self.active,
            self.geometry.to_canvas(pointer),
            self.geometry.reach_radius_sqr(),
        )
    }

    /// Coordinate readout `(domain value, y)` for the captured handle, or the
    /// handle under the pointer
    pub fn tooltip(&self, pointer: Point) -> Option<Tooltip> {
        let point = match self.captured {
            Some(index) => self.channels.points(self.active).get(index).copied(),
            None => self.hover(pointer).map(|hit| hit.point),
        }?;
        Some(Tooltip {
            anchor: pointer,
            text: format!("({:.0}, {:.4})", self.domain_size as f32 * point.x, point.y),
        })
    }

    /// Apply one frame of pointer input
    ///
    /// Returns true if the transfer function changed.
    pub fn handle_input(&mut self, input: &FrameInput) -> bool {
        // Nothing to do unless hovering or holding a handle
        if !input.hovered && !self.is_captured() {
            return false;
        }

        let pointer = self.geometry.to_canvas(input.pointer);

        if let Some(hit) = nearest_handle(
            &self.channels,
            self.active,
            pointer,
            self.geometry.reach_radius_sqr(),
        ) {
            if input.clicked() {
                self.select(hit, input);
            }
        }

        if input.released() {
            self.captured = None;
        }

        match self.captured {
            Some(index) if input.secondary_clicked => self.delete_captured(index),
            Some(index) if input.primary_dragging => self.move_captured(index, pointer),
            Some(_) => false,
            None if input.secondary_clicked && self.channels.has_room(self.active) => {
                self.insert(pointer)
            }
            None => false,
        }
    }

    /// Capture or switch channels in response to a click on `hit`
    fn select(&mut self, hit: Hit, input: &FrameInput) {
        if hit.channel == self.active {
            log::debug!("tf-editor: captured {} handle {}", hit.channel, hit.index);
            self.captured = Some(hit.index);
        } else if !self.focus_mode && input.primary_clicked {
            self.set_active_channel(hit.channel);
        }
    }

    fn delete_captured(&mut self, index: usize) -> bool {
        match self.channels.remove(self.active, index) {
            Some(point) => {
                log::debug!(
                    "tf-editor: removed {} handle {} at ({:.3}, {:.3})",
                    self.active,
                    index,
                    point.x,
                    point.y
                );
                self.captured = None;
                true
            }
            None => false,
        }
    }

    fn move_captured(&mut self, index: usize, pointer: Point) -> bool {
        self.channels
            .move_point(self.active, index, pointer)
            .is_some()
    }

    fn insert(&mut self, pointer: Point) -> bool {
        let inserted = self.channels.insert(self.active, pointer);
        if inserted {
            log::debug!(
                "tf-editor: inserted {} handle at ({:.3}, {:.3})",
                self.active,
                pointer.x,
                pointer.y
            );
        }
        match self.insert_report {
            InsertReport::Always => true,
            InsertReport::OnMutation => inserted,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────

    /// Sample all channels into a dense table
    pub fn sampled(&self) -> SampledTable {
        sample(&self.channels, self.domain_size)
    }

    /// Flat row-major table of `domain_size * 4` values (R, G, B, A per row)
    pub fn sample_table(&self) -> Vec<f32> {
        self.sampled().into_vec()
    }

    /// Write the sampled table to `<name>_TF.dat`
    pub fn export_to_file(&self, name: impl AsRef<Path>) -> TfResult<PathBuf> {
        export::export_to_file(name, &self.sampled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{DEFAULT_MAX_HANDLES, MIN_SEEDED_HANDLES};
    use crate::render::tests::RecordingPainter;

    fn editor_with(points: [Vec<Point>; 4]) -> TransferFunctionEditor {
        TransferFunctionEditor::default()
            .with_channels(ChannelStore::from_points(points, DEFAULT_MAX_HANDLES))
    }

    /// Screen position of a canvas point
    fn at(editor: &TransferFunctionEditor, x: f32, y: f32) -> Point {
        editor.geometry().to_screen(Point::new(x, y))
    }

    fn simple_editor() -> TransferFunctionEditor {
        let mut editor = editor_with([
            vec![Point::new(0.0, 0.0), Point::new(0.4, 0.5), Point::new(0.6, 0.6)],
            vec![Point::new(0.0, 1.0), Point::new(0.8, 0.2)],
            vec![Point::new(0.3, 0.9)],
            vec![Point::new(0.0, 0.1), Point::new(1.0, 0.1)],
        ]);
        editor.set_active_channel(Channel::Red);
        editor
    }

    #[test]
    fn test_click_captures_active_handle() {
        let mut editor = simple_editor();
        let changed = editor.handle_input(&FrameInput::primary_click(at(&editor, 0.401, 0.5)));
        assert!(!changed);
        assert_eq!(editor.captured_handle(), Some(1));
    }

    #[test]
    fn test_drag_moves_and_clamps() {
        let mut editor = simple_editor();
        editor.handle_input(&FrameInput::primary_click(at(&editor, 0.4, 0.5)));

        assert!(editor.handle_input(&FrameInput::drag(at(&editor, 0.45, 0.7))));
        let p = editor.channel_points(Channel::Red)[1];
        assert!((p.x - 0.45).abs() < 1e-4 && (p.y - 0.7).abs() < 1e-4);

        // Past the right neighbour: clamped exactly to its x
        assert!(editor.handle_input(&FrameInput::drag(at(&editor, 0.95, 1.3))));
        assert_eq!(editor.channel_points(Channel::Red)[1], Point::new(0.6, 1.0));

        // Capture persists across frames, even when leaving the widget
        let outside = FrameInput::drag(at(&editor, 0.5, -2.0)).with_hovered(false);
        assert!(editor.handle_input(&outside));
        assert_eq!(editor.channel_points(Channel::Red)[1].y, 0.0);

        assert!(!editor.handle_input(&FrameInput::release(at(&editor, 0.5, 0.5))));
        assert!(!editor.is_captured());
    }

    #[test]
    fn test_release_drops_capture_before_moving() {
        let mut editor = simple_editor();
        editor.handle_input(&FrameInput::primary_click(at(&editor, 0.4, 0.5)));
        let input = FrameInput {
            primary_dragging: true,
            primary_released: true,
            ..FrameInput::hover(at(&editor, 0.5, 0.9))
        };
        assert!(!editor.handle_input(&input));
        assert_eq!(editor.channel_points(Channel::Red)[1], Point::new(0.4, 0.5));
    }

    #[test]
    fn test_secondary_click_on_handle_deletes() {
        let mut editor = simple_editor();
        let pos = at(&editor, 0.4, 0.5);
        // Click captures, then the same frame's secondary click deletes
        assert!(editor.handle_input(&FrameInput::secondary_click(pos)));
        assert_eq!(editor.channel_points(Channel::Red).len(), 2);
        assert!(!editor.is_captured());
    }

    #[test]
    fn test_delete_last_point_is_noop() {
        let mut editor = simple_editor();
        editor.set_active_channel(Channel::Blue);
        let pos = at(&editor, 0.3, 0.9);
        assert!(!editor.handle_input(&FrameInput::secondary_click(pos)));
        assert_eq!(editor.channel_points(Channel::Blue).len(), 1);
        assert_eq!(editor.captured_handle(), Some(0));
    }

    #[test]
    fn test_secondary_click_inserts() {
        let mut editor = simple_editor();
        assert!(editor.handle_input(&FrameInput::secondary_click(at(&editor, 0.2, 0.3))));
        let red = editor.channel_points(Channel::Red);
        assert_eq!(red.len(), 4);
        assert!((red[1].x - 0.2).abs() < 1e-4);
        assert!(red.windows(2).all(|w| w[0].x <= w[1].x));
        assert!(!editor.is_captured());
    }

    #[test]
    fn test_insert_outside_canvas_reports_per_policy() {
        let mut editor = simple_editor();
        let outside = at(&editor, 1.02, 0.5);
        assert!(editor.handle_input(&FrameInput::secondary_click(outside)));
        assert_eq!(editor.channel_points(Channel::Red).len(), 3);

        let mut strict = simple_editor().with_insert_report(InsertReport::OnMutation);
        assert!(!strict.handle_input(&FrameInput::secondary_click(outside)));
        assert_eq!(strict.channel_points(Channel::Red).len(), 3);
    }

    #[test]
    fn test_insert_rejected_on_edges_and_when_full() {
        // Unit scaling keeps the x = 1 edge exact through the screen mapping
        let config = EditorConfig {
            scaling: 1.0,
            insert_report: InsertReport::OnMutation,
            ..EditorConfig::default()
        };
        let mut editor = TransferFunctionEditor::from_config(&config)
            .unwrap()
            .with_channels(simple_editor().channels().clone());
        editor.set_active_channel(Channel::Red);

        assert!(!editor.handle_input(&FrameInput::secondary_click(at(&editor, 1.0, 0.3))));
        assert_eq!(editor.channel_points(Channel::Red).len(), 3);

        // Alternate rows so no click lands within reach of the previous point
        let mut i = 0;
        while editor.channel_points(Channel::Red).len() < DEFAULT_MAX_HANDLES {
            let x = 0.62 + i as f32 * 0.0225;
            let y = if i % 2 == 0 { 0.75 } else { 0.95 };
            assert!(editor.handle_input(&FrameInput::secondary_click(at(&editor, x, y))));
            i += 1;
        }
        let full = FrameInput::secondary_click(at(&editor, 0.2, 0.05));
        assert!(!editor.handle_input(&full));
        assert_eq!(editor.channel_points(Channel::Red).len(), DEFAULT_MAX_HANDLES);

        // Even the lenient policy reports nothing when the channel is full
        let mut lenient = editor.clone().with_insert_report(InsertReport::Always);
        assert!(!lenient.handle_input(&full));
    }

    #[test]
    fn test_click_other_channel_switches_without_capture() {
        let mut editor = simple_editor();
        let pos = at(&editor, 0.8, 0.2);
        assert!(!editor.handle_input(&FrameInput::primary_click(pos)));
        assert_eq!(editor.active_channel(), Channel::Green);
        assert!(!editor.is_captured());

        // Next click on the same handle captures it
        editor.handle_input(&FrameInput::primary_click(pos));
        assert_eq!(editor.captured_handle(), Some(1));
    }

    #[test]
    fn test_secondary_click_other_channel_does_not_switch() {
        let mut editor = simple_editor();
        let pos = at(&editor, 0.8, 0.2);
        // Secondary click on another channel's handle falls through to insert
        assert!(editor.handle_input(&FrameInput::secondary_click(pos)));
        assert_eq!(editor.active_channel(), Channel::Red);
        assert_eq!(editor.channel_points(Channel::Red).len(), 4);
        assert_eq!(editor.channel_points(Channel::Green).len(), 2);
    }

    #[test]
    fn test_focus_mode_ignores_other_channels() {
        let mut editor = simple_editor();
        editor.set_focus_mode(true);
        let pos = at(&editor, 0.8, 0.2);
        assert!(!editor.handle_input(&FrameInput::primary_click(pos)));
        assert_eq!(editor.active_channel(), Channel::Red);
        assert!(!editor.is_captured());
    }

    #[test]
    fn test_not_hovered_is_ignored() {
        let mut editor = simple_editor();
        let input = FrameInput::secondary_click(at(&editor, 0.2, 0.3)).with_hovered(false);
        assert!(!editor.handle_input(&input));
        assert_eq!(editor.channel_points(Channel::Red).len(), 3);
    }

    #[test]
    fn test_tooltip_reports_domain_value() {
        let editor = simple_editor();
        let tooltip = editor.tooltip(at(&editor, 0.4, 0.5)).unwrap();
        assert_eq!(tooltip.text, "(102, 0.5000)");
        assert!(editor.tooltip(at(&editor, 0.2, 0.3)).is_none());
    }

    #[test]
    fn test_tooltip_follows_captured_handle() {
        let mut editor = simple_editor();
        editor.handle_input(&FrameInput::primary_click(at(&editor, 0.4, 0.5)));
        editor.handle_input(&FrameInput::drag(at(&editor, 0.95, 1.3)));

        // Pointer is past the clamped handle, readout still tracks it
        let tooltip = editor.tooltip(at(&editor, 0.95, 1.3)).unwrap();
        assert_eq!(tooltip.text, "(154, 1.0000)");
    }

    #[test]
    fn test_show_draws_tooltip_when_hovering() {
        let mut editor = simple_editor();
        let mut painter = RecordingPainter::default();
        let changed = editor.show(&FrameInput::hover(at(&editor, 0.3, 0.9)), &mut painter);
        assert!(!changed);
        assert_eq!(painter.tooltips(), vec!["(77, 0.9000)"]);

        let mut painter = RecordingPainter::default();
        let away = FrameInput::hover(at(&editor, 0.3, 0.9)).with_hovered(false);
        editor.show(&away, &mut painter);
        assert!(painter.tooltips().is_empty());
    }

    #[test]
    fn test_set_domain_size() {
        let mut editor = simple_editor();
        let before = editor.channels().clone();
        editor.set_domain_size(16).unwrap();
        assert_eq!(editor.sample_table().len(), 64);
        assert_eq!(editor.channels(), &before);
        assert!(matches!(
            editor.set_domain_size(0),
            Err(TransferFunctionError::InvalidDomainSize(0))
        ));
        assert_eq!(editor.domain_size(), 16);
    }

    #[test]
    fn test_constructor_validation() {
        assert!(TransferFunctionEditor::new(0, 256.0, 256.0).is_err());
        assert!(TransferFunctionEditor::new(256, 0.0, 256.0).is_err());
        let editor = TransferFunctionEditor::new(128, 200.0, 100.0).unwrap();
        assert_eq!(editor.domain_size(), 128);
        assert_eq!(editor.active_channel(), Channel::Alpha);
    }

    #[test]
    fn test_from_config() {
        let config = EditorConfig {
            domain_size: 64,
            focus_mode: true,
            max_handles: 8,
            ..EditorConfig::default()
        };
        let editor = TransferFunctionEditor::from_config(&config).unwrap();
        assert_eq!(editor.domain_size(), 64);
        assert!(editor.focus_mode());
        assert_eq!(editor.channels().max_handles(), 8);
    }

    #[test]
    fn test_from_config_rejects_small_handle_limit() {
        let config = EditorConfig {
            max_handles: 3,
            ..EditorConfig::default()
        };
        let err = TransferFunctionEditor::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            TransferFunctionError::InvalidHandleLimit { limit: 3, min: MIN_SEEDED_HANDLES }
        ));
        assert!(err.to_string().contains("at least 6"));
    }

    #[test]
    fn test_random_gestures_keep_invariants() {
        let mut editor = TransferFunctionEditor::default();
        let mut seed: u32 = 0x2545_f491;
        let mut next = || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed % 10_000) as f32 / 10_000.0
        };

        for _ in 0..5_000 {
            let x = next() * 1.2 - 0.1;
            let y = next() * 1.2 - 0.1;
            let pos = at(&editor, x, y);
            let input = match (next() * 6.0) as u32 {
                0 => FrameInput::primary_click(pos),
                1 => FrameInput::secondary_click(pos),
                2 | 3 => FrameInput::drag(pos),
                4 => FrameInput::release(pos),
                _ => FrameInput::hover(pos),
            };
            editor.handle_input(&input);

            for (channel, points) in editor.channels().iter() {
                assert!(!points.is_empty(), "{} emptied", channel);
                assert!(points.len() <= DEFAULT_MAX_HANDLES);
                assert!(points.windows(2).all(|w| w[0].x <= w[1].x), "{} unsorted", channel);
                assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.y)));
            }
        }
    }
}
