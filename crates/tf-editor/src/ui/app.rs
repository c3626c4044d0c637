//! Main application state and iced implementation

use std::path::PathBuf;

use anyhow::Context;
use iced::widget::{button, canvas::Canvas, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Task, Theme};
use tf_core::{load_config, save_config, Channel, EditorConfig, SampledTable, TransferFunctionEditor};
use tf_widgets::transfer_function_editor;

use super::message::Message;
use super::preview::{TablePreview, PREVIEW_HEIGHT};

/// Main application
pub struct EditorApp {
    /// Loaded configuration (updated on save)
    config: EditorConfig,
    /// Where settings are saved
    config_path: PathBuf,
    /// Editor widget state (control points, capture, active channel)
    editor: TransferFunctionEditor,
    /// Table sampled from the current curves
    table: SampledTable,
    /// Domain size text field contents
    domain_input: String,
    /// Status message
    status: String,
}

/// Build the editor described by `config`
fn build_editor(config: &EditorConfig) -> anyhow::Result<TransferFunctionEditor> {
    TransferFunctionEditor::from_config(config).with_context(|| {
        format!(
            "invalid editor settings (domain {}, canvas {}x{} @ {})",
            config.domain_size, config.width, config.height, config.scaling
        )
    })
}

impl EditorApp {
    /// Create a new application instance from the config at `config_path`
    pub fn new(config_path: PathBuf) -> (Self, Task<Message>) {
        let config = load_config(&config_path);
        log::info!(
            "Loaded config: domain {}, max {} handles per channel",
            config.domain_size,
            config.max_handles
        );

        let editor = build_editor(&config).unwrap_or_else(|e| {
            log::warn!("{:#} - using defaults", e);
            TransferFunctionEditor::default()
        });
        let table = editor.sampled();

        let app = Self {
            domain_input: editor.domain_size().to_string(),
            status: String::from("Right-click to add or remove handles, drag to move"),
            config,
            config_path,
            editor,
            table,
        };

        (app, Task::none())
    }

    /// Base name used for exported tables
    pub fn export_name(&self) -> &str {
        &self.config.export_name
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TransferFunction(msg) => {
                if tf_widgets::update(&mut self.editor, msg) {
                    self.table = self.editor.sampled();
                }
            }
            Message::DomainSizeChanged(input) => {
                self.domain_input = input;
            }
            Message::ApplyDomainSize => self.apply_domain_size(),
            Message::ExportNameChanged(name) => {
                self.config.export_name = name;
            }
            Message::Export => self.export(),
            Message::SaveSettings => return self.save_settings(),
            Message::SaveSettingsComplete(result) => match result {
                Ok(path) => {
                    log::info!("Settings saved to {:?}", path);
                    self.status = format!("Settings saved to {}", path.display());
                }
                Err(e) => {
                    log::error!("Failed to save settings: {}", e);
                    self.status = format!("Failed to save settings: {}", e);
                }
            },
        }
        Task::none()
    }

    fn apply_domain_size(&mut self) {
        let parsed = self
            .domain_input
            .trim()
            .parse::<usize>()
            .map_err(|e| e.to_string())
            .and_then(|size| {
                self.editor
                    .set_domain_size(size)
                    .map_err(|e| e.to_string())
            });

        match parsed {
            Ok(()) => {
                self.table = self.editor.sampled();
                self.status = format!("Domain size set to {}", self.editor.domain_size());
            }
            Err(e) => {
                log::warn!("Rejected domain size {:?}: {}", self.domain_input, e);
                self.status = format!("Invalid domain size {:?}: {}", self.domain_input, e);
                self.domain_input = self.editor.domain_size().to_string();
            }
        }
    }

    fn export(&mut self) {
        if self.config.export_name.trim().is_empty() {
            self.status = String::from("Export name is empty");
            return;
        }
        match self.editor.export_to_file(self.config.export_base()) {
            Ok(path) => {
                self.status = format!("Exported {} rows to {}", self.table.domain(), path.display());
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.status = format!("Export failed: {}", e);
            }
        }
    }

    fn save_settings(&mut self) -> Task<Message> {
        self.config.domain_size = self.editor.domain_size();
        self.config.focus_mode = self.editor.focus_mode();

        let config = self.config.clone();
        let config_path = self.config_path.clone();
        Task::perform(
            async move {
                save_config(&config, &config_path)
                    .map(|()| config_path)
                    .map_err(|e| format!("{:#}", e))
            },
            Message::SaveSettingsComplete,
        )
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let editor = transfer_function_editor(&self.editor).map(Message::TransferFunction);

        let domain = row![
            text("Domain size").size(14),
            text_input("256", &self.domain_input)
                .on_input(Message::DomainSizeChanged)
                .on_submit(Message::ApplyDomainSize)
                .width(Length::Fixed(90.0)),
            button(text("Apply").size(14)).on_press(Message::ApplyDomainSize),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let export = row![
            text("Export as").size(14),
            text_input("transfer_function", &self.config.export_name)
                .on_input(Message::ExportNameChanged)
                .on_submit(Message::Export)
                .width(Length::Fixed(200.0)),
            button(text("Export").size(14))
                .on_press(Message::Export)
                .style(button::primary),
            Space::new().width(Length::Fill),
            button(text("Save Settings").size(14))
                .on_press(Message::SaveSettings)
                .style(button::secondary),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let preview = Canvas::new(TablePreview { table: &self.table })
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT));

        let counts = Channel::ALL
            .iter()
            .map(|&channel| {
                format!(
                    "{} {}",
                    channel.short_name(),
                    self.editor.channel_points(channel).len()
                )
            })
            .collect::<Vec<_>>()
            .join("  ");

        let footer = row![
            text(&self.status).size(12),
            Space::new().width(Length::Fill),
            text(format!("Handles: {}", counts)).size(12),
        ];

        let main = column![
            text("Transfer Function").size(24),
            editor,
            domain,
            preview,
            export,
            footer,
        ]
        .spacing(12);

        container(main)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
