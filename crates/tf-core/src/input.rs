//! Per-frame pointer input supplied by the host backend

use crate::geometry::Point;

/// Pointer state for one frame (or one backend event)
///
/// Click and release flags are edges: true only on the frame the button
/// changed state. `primary_dragging` is true while the primary button is
/// held and the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position in screen space
    pub pointer: Point,
    pub primary_clicked: bool,
    pub secondary_clicked: bool,
    pub primary_released: bool,
    pub secondary_released: bool,
    pub primary_dragging: bool,
    /// Whether the pointer is over the widget's interactive region
    pub hovered: bool,
}

impl FrameInput {
    /// Pointer hovering at `pointer` with no buttons changing
    pub fn hover(pointer: Point) -> Self {
        Self {
            pointer,
            hovered: true,
            ..Self::default()
        }
    }

    pub fn primary_click(pointer: Point) -> Self {
        Self {
            primary_clicked: true,
            ..Self::hover(pointer)
        }
    }

    pub fn secondary_click(pointer: Point) -> Self {
        Self {
            secondary_clicked: true,
            ..Self::hover(pointer)
        }
    }

    pub fn drag(pointer: Point) -> Self {
        Self {
            primary_dragging: true,
            ..Self::hover(pointer)
        }
    }

    pub fn release(pointer: Point) -> Self {
        Self {
            primary_released: true,
            secondary_released: true,
            ..Self::hover(pointer)
        }
    }

    /// Same input with the hover flag overridden
    pub fn with_hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn clicked(&self) -> bool {
        self.primary_clicked || self.secondary_clicked
    }

    pub fn released(&self) -> bool {
        self.primary_released || self.secondary_released
    }
}
