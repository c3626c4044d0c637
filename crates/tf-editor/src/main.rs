//! Transfer function editor - GUI application
//!
//! ## Command line flags
//!
//! - `--config <path>`: Use a config file other than the platform default

use std::path::PathBuf;

use tf_core::default_config_path;
use tf_editor::ui::EditorApp;

fn title(app: &EditorApp) -> String {
    format!("tf-editor - {}", app.export_name())
}

/// Config path from `--config <path>`, or the platform default
fn config_path_from_args() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config_path = config_path_from_args();
    log::info!("tf-editor starting up (config: {:?})", config_path);

    iced::application(
        move || EditorApp::new(config_path.clone()),
        EditorApp::update,
        EditorApp::view,
    )
    .title(title)
    .window_size(iced::Size::new(720.0, 760.0))
    .theme(EditorApp::theme)
    .run()
}
