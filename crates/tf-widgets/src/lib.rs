//! Shared UI widgets for transfer function editing
//!
//! This crate wraps the toolkit-independent editor from `tf-core` in iced
//! widgets.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: `tf_core::TransferFunctionEditor`, owned by the application
//! - **View function**: `transfer_function_editor` takes the state and returns
//!   an `Element<TransferFunctionMessage>`
//! - **Canvas Program**: translates iced mouse events into `FrameInput`
//!   messages and forwards draw requests to a `canvas::Frame`
//! - **Update function**: `update` applies a message to the editor state
//!
//! ## Usage
//!
//! ```ignore
//! // view
//! transfer_function_editor(&self.editor).map(Message::TransferFunction)
//!
//! // update
//! Message::TransferFunction(msg) => {
//!     if tf_widgets::update(&mut self.editor, msg) {
//!         self.table = self.editor.sample_table();
//!     }
//! }
//! ```

pub mod button_styles;
pub mod theme;
pub mod transfer_function;

pub use theme::{channel_button_colors, to_color, ChannelButtonColors};
pub use transfer_function::{
    transfer_function_editor, update, FramePainter, PointerInteraction, TransferFunctionCanvas,
    TransferFunctionMessage,
};
