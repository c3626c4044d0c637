//! Messages for the transfer function editor widget

use tf_core::{Channel, FrameInput};

/// Messages emitted by the transfer function editor
#[derive(Debug, Clone)]
pub enum TransferFunctionMessage {
    /// Channel selector button pressed
    SelectChannel(Channel),

    /// Focus mode checkbox toggled
    SetFocusMode(bool),

    /// Pointer input on the canvas (one per relevant mouse event)
    Input(FrameInput),
}
