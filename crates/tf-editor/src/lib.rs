//! Transfer function editor application
//!
//! Hosts the `tf-widgets` editor in an iced window, with controls for the
//! sampling domain, a live preview of the sampled table, table export and
//! settings persistence.

pub mod ui;
