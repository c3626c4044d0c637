//! Canvas Program for the transfer function editor
//!
//! Translates iced mouse events into per-event `FrameInput` snapshots and
//! publishes them through a callback. The editor state itself lives in the
//! application, so a captured handle survives across frames.

use iced::widget::canvas::{self, Event, Frame, Geometry, Program};
use iced::{mouse, Rectangle, Theme};
use tf_core::{FrameInput, TransferFunctionEditor};

use super::painter::FramePainter;
use crate::theme::from_point;

/// Canvas state for tracking pointer interaction between events
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInteraction {
    /// Whether the primary button went down inside the canvas and is still held
    pub primary_held: bool,
    /// Last known pointer position relative to the canvas
    pub last_position: tf_core::Point,
}

/// Canvas program for the transfer function curves
///
/// Takes a callback closure `on_input` that's called with the pointer
/// snapshot of every mouse event relevant to the editor.
pub struct TransferFunctionCanvas<'a, Message, F>
where
    F: Fn(FrameInput) -> Message,
{
    pub editor: &'a TransferFunctionEditor,
    pub on_input: F,
}

impl<'a, Message, F> TransferFunctionCanvas<'a, Message, F>
where
    F: Fn(FrameInput) -> Message,
{
    /// Build the input snapshot for a mouse event, or `None` if the editor
    /// doesn't care about it
    fn frame_input(
        &self,
        interaction: &mut PointerInteraction,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<FrameInput> {
        if let Some(position) = cursor.position_from(bounds.position()) {
            interaction.last_position = from_point(position);
        }
        let pointer = interaction.last_position;
        let hovered = cursor.is_over(bounds)
            && self.editor.geometry().hover_bounds().contains(pointer);

        // Outside the widget only a drag in progress is tracked
        if !hovered && !self.editor.is_captured() && !interaction.primary_held {
            return None;
        }

        let mut input = FrameInput::hover(pointer).with_hovered(hovered);
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if !hovered {
                    return None;
                }
                interaction.primary_held = true;
                input.primary_clicked = true;
            }
            mouse::Event::ButtonPressed(mouse::Button::Right) => {
                // A captured handle can still be deleted from outside
                if !hovered && !self.editor.is_captured() {
                    return None;
                }
                input.secondary_clicked = true;
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                interaction.primary_held = false;
                input.primary_released = true;
            }
            mouse::Event::ButtonReleased(mouse::Button::Right) => {
                input.secondary_released = true;
            }
            mouse::Event::CursorMoved { .. } => {
                if !interaction.primary_held || !self.editor.is_captured() {
                    return None;
                }
                input.primary_dragging = true;
            }
            _ => return None,
        }
        Some(input)
    }
}

impl<'a, Message, F> Program<Message> for TransferFunctionCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(FrameInput) -> Message,
{
    type State = PointerInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let Event::Mouse(mouse_event) = event else {
            return None;
        };

        match self.frame_input(interaction, mouse_event, bounds, cursor) {
            Some(input) => Some(canvas::Action::publish((self.on_input)(input))),
            // Hover tooltip follows the cursor
            None if matches!(mouse_event, mouse::Event::CursorMoved { .. })
                && cursor.is_over(bounds) =>
            {
                Some(canvas::Action::request_redraw())
            }
            None => None,
        }
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.editor.is_captured() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.editor.hover(from_point(position)).is_some() => {
                mouse::Interaction::Pointer
            }
            Some(_) => mouse::Interaction::Crosshair,
            None => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Keep the tooltip on the dragged handle even when the cursor leaves
        let pointer = cursor
            .position_in(bounds)
            .map(from_point)
            .or_else(|| self.editor.is_captured().then_some(interaction.last_position));

        let mut painter = FramePainter::new(&mut frame);
        self.editor.draw(&mut painter, pointer);

        vec![frame.into_geometry()]
    }
}
