//! Application messages

use std::path::PathBuf;

use tf_widgets::TransferFunctionMessage;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Editor widget interaction
    TransferFunction(TransferFunctionMessage),

    // Sampling
    /// Domain size text edited (applied on submit)
    DomainSizeChanged(String),
    ApplyDomainSize,

    // Export
    ExportNameChanged(String),
    Export,

    // Settings
    SaveSettings,
    SaveSettingsComplete(Result<PathBuf, String>),
}
