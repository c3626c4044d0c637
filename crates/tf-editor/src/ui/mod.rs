//! User interface modules for tf-editor

pub mod app;
pub mod message;
pub mod preview;

pub use app::EditorApp;
pub use message::Message;
