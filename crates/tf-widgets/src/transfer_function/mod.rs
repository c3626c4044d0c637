//! Transfer function editor widget
//!
//! Four channel curves on a shared canvas, with a channel selector and a
//! focus-mode toggle above it.
//!
//! ```text
//! [Red] [Green] [Blue] [Alpha]  [x] Focus Mode
//! ┌──────────────────────────────────────────┐
//! │ ●───●                           ●────●   │
//! │        ╲          ●────────●╱            │
//! │          ●────●╱                         │
//! └──────────────────────────────────────────┘
//! ```
//!
//! - Left-drag a handle of the active channel to move it
//! - Right-click empty space to add a handle, right-click a handle to remove it
//! - Left-click another channel's handle to make that channel active

mod canvas;
mod message;
mod painter;
mod view;

pub use canvas::{PointerInteraction, TransferFunctionCanvas};
pub use message::TransferFunctionMessage;
pub use painter::FramePainter;
pub use view::{transfer_function_editor, CHANNEL_BUTTON_HEIGHT, CHANNEL_BUTTON_WIDTH};

use tf_core::TransferFunctionEditor;

/// Apply a widget message to the editor
///
/// Returns true if the transfer function changed and should be re-sampled.
pub fn update(editor: &mut TransferFunctionEditor, message: TransferFunctionMessage) -> bool {
    match message {
        TransferFunctionMessage::SelectChannel(channel) => {
            editor.set_active_channel(channel);
            false
        }
        TransferFunctionMessage::SetFocusMode(enabled) => {
            log::debug!("tf-widgets: focus mode {}", if enabled { "on" } else { "off" });
            editor.set_focus_mode(enabled);
            false
        }
        TransferFunctionMessage::Input(input) => editor.handle_input(&input),
    }
}
