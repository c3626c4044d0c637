//! Coordinate mapping between the drawing surface and the canvas
//!
//! Two spaces are involved:
//!
//! - **Screen space**: surface pixels as reported by the host, y grows downward
//! - **Canvas space**: the unit square shared by all channels, y grows upward
//!
//! ```text
//!   origin ─► ┌───────────────┐  (1,1)
//!             │               │
//!             │    canvas     │
//!             │               │
//!      (0,0)  └───────────────┘
//! ```
//!
//! The mapper never clamps; callers decide what to do with positions that
//! fall outside the unit square.

use std::ops::{Add, Mul, Sub};

use crate::error::{TfResult, TransferFunctionError};

/// Default logical canvas width
pub const DEFAULT_WIDTH: f32 = 256.0;
/// Default logical canvas height
pub const DEFAULT_HEIGHT: f32 = 256.0;
/// Default pixel scaling applied to the logical canvas size
pub const DEFAULT_SCALING: f32 = 1.6;

/// Handle radius and border in logical units (multiplied by scaling)
const HANDLE_RADIUS_UNITS: f32 = 4.0;
const HANDLE_BORDER_UNITS: f32 = 1.0;

/// A 2D position, used for both screen and canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean length
    pub fn length_sqr(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Squared distance to another point
    pub fn distance_sqr(self, other: Point) -> f32 {
        (self - other).length_sqr()
    }

    /// True if the point lies strictly inside the open unit square
    pub fn is_inside_unit(self) -> bool {
        self.x > 0.0 && self.x < 1.0 && self.y > 0.0 && self.y < 1.0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Grow the rectangle by `margin` on every side
    pub fn expand(&self, margin: Point) -> Rect {
        Rect::new(self.min - margin, self.max + margin)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Canvas geometry: logical size, scaling, handle metrics and screen origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    width: f32,
    height: f32,
    scaling: f32,
    handle_radius: f32,
    handle_border: f32,
    margins: Point,
    origin: Point,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self::build(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SCALING)
    }
}

impl CanvasGeometry {
    /// Create a geometry for a `width` x `height` logical canvas drawn at `scaling`
    ///
    /// The origin starts at the margin offset, i.e. the canvas sits at the
    /// top-left of its own widget area. Hosts that place the widget elsewhere
    /// call [`CanvasGeometry::set_origin`] every frame.
    pub fn new(width: f32, height: f32, scaling: f32) -> TfResult<Self> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        check_positive("scaling", scaling)?;
        Ok(Self::build(width, height, scaling))
    }

    fn build(width: f32, height: f32, scaling: f32) -> Self {
        let handle_radius = HANDLE_RADIUS_UNITS * scaling;
        let margins = Point::new(2.0 * handle_radius, 2.0 * handle_radius);
        Self {
            width,
            height,
            scaling,
            handle_radius,
            handle_border: HANDLE_BORDER_UNITS * scaling,
            margins,
            origin: margins,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scaling(&self) -> f32 {
        self.scaling
    }

    pub fn handle_radius(&self) -> f32 {
        self.handle_radius
    }

    pub fn handle_border(&self) -> f32 {
        self.handle_border
    }

    pub fn margins(&self) -> Point {
        self.margins
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the canvas' top-left corner to `origin` (screen space)
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Size of the scaled canvas in screen pixels
    pub fn canvas_size(&self) -> Point {
        Point::new(self.width * self.scaling, self.height * self.scaling)
    }

    /// Size of the whole widget (canvas plus margins on every side)
    pub fn widget_size(&self) -> Point {
        self.canvas_size() + self.margins * 2.0
    }

    /// Screen rectangle covered by the canvas frame
    pub fn canvas_bounds(&self) -> Rect {
        Rect::new(self.origin, self.origin + self.canvas_size())
    }

    /// Screen rectangle that reacts to the pointer (canvas grown by margins)
    pub fn hover_bounds(&self) -> Rect {
        self.canvas_bounds().expand(self.margins)
    }

    /// Squared canvas-space distance within which a handle is reachable
    ///
    /// Derived from the handle radius relative to the canvas diagonal, so the
    /// reach stays the same on screen regardless of canvas resolution.
    pub fn reach_radius_sqr(&self) -> f32 {
        4.0 * self.handle_radius * self.handle_radius
            / (self.width * self.width + self.height * self.height)
    }

    /// Map a screen position to canvas space
    pub fn to_canvas(&self, pos: Point) -> Point {
        let height = self.height * self.scaling;
        let px = (pos.x - self.origin.x) / self.scaling;
        let py = -((pos.y - self.origin.y - height) / self.scaling);
        Point::new(px / self.width, py / self.height)
    }

    /// Map a canvas position to screen space
    pub fn to_screen(&self, pos: Point) -> Point {
        let height = self.height * self.scaling;
        Point::new(
            pos.x * self.width * self.scaling,
            height - pos.y * self.height * self.scaling,
        ) + self.origin
    }
}

fn check_positive(field: &'static str, value: f32) -> TfResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TransferFunctionError::InvalidGeometry { field, value })
    }
}
