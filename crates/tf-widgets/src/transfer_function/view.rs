//! View function for the transfer function editor

use iced::widget::{button, canvas::Canvas, checkbox, column, container, row, text, Row};
use iced::{Alignment, Element, Length};
use tf_core::{Channel, TransferFunctionEditor};

use super::canvas::TransferFunctionCanvas;
use super::message::TransferFunctionMessage;
use crate::button_styles::channel_style;
use crate::theme::channel_button_colors;

pub const CHANNEL_BUTTON_WIDTH: f32 = 80.0;
pub const CHANNEL_BUTTON_HEIGHT: f32 = 28.0;

/// Channel selector row, focus-mode toggle and curve canvas
pub fn transfer_function_editor(
    editor: &TransferFunctionEditor,
) -> Element<'_, TransferFunctionMessage> {
    let active = editor.active_channel();

    let buttons: Vec<Element<TransferFunctionMessage>> = Channel::ALL
        .iter()
        .map(|&channel| {
            let is_active = channel == active;
            let colors = channel_button_colors(channel);
            button(
                container(text(channel.name()).size(13))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .width(Length::Fixed(CHANNEL_BUTTON_WIDTH))
            .height(Length::Fixed(CHANNEL_BUTTON_HEIGHT))
            .padding(0)
            .on_press(TransferFunctionMessage::SelectChannel(channel))
            .style(move |_theme, status| channel_style(status, is_active, colors))
            .into()
        })
        .collect();

    let focus_toggle = checkbox(editor.focus_mode())
        .label("Focus Mode")
        .on_toggle(TransferFunctionMessage::SetFocusMode)
        .size(16);

    let controls = row![Row::with_children(buttons).spacing(4), focus_toggle]
        .spacing(12)
        .align_y(Alignment::Center);

    let size = editor.geometry().widget_size();
    let curves = Canvas::new(TransferFunctionCanvas {
        editor,
        on_input: TransferFunctionMessage::Input,
    })
    .width(Length::Fixed(size.x))
    .height(Length::Fixed(size.y));

    column![controls, curves].spacing(8).into()
}
