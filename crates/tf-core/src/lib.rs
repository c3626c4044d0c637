//! TF Core - Control-point model for RGBA transfer functions
//!
//! This crate holds everything about a transfer function editor that does not
//! depend on a particular UI toolkit:
//!
//! - **Geometry**: mapping between surface pixels and the normalized canvas
//! - **Channels**: four ordered control-point curves (R, G, B, A)
//! - **Hit testing**: nearest-handle search with active-channel priority
//! - **Editor**: per-frame gesture handling (capture, move, insert, delete)
//! - **Sampler**: piecewise-linear expansion into a dense lookup table
//! - **Export**: fixed-width text dump of the sampled table
//!
//! Hosts feed a [`FrameInput`] each frame and receive draw requests through
//! the [`Painter`] trait, so the same editor runs under iced or any other
//! immediate-mode backend.

pub mod channel;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod render;
pub mod sampler;

pub use channel::{
    Channel, ChannelStore, ControlPoint, DEFAULT_MAX_HANDLES, MIN_SEEDED_HANDLES, NUM_CHANNELS,
};
pub use config::{default_config_path, load_config, save_config, EditorConfig, InsertReport};
pub use editor::{Tooltip, TransferFunctionEditor};
pub use error::{TfResult, TransferFunctionError};
pub use export::{export_path, write_table, EXPORT_SUFFIX};
pub use geometry::{CanvasGeometry, Point, Rect};
pub use hit_test::{nearest_handle, Hit};
pub use input::FrameInput;
pub use render::{Painter, Rgba, HANDLE_COLORS};
pub use sampler::{sample, SampledTable};
