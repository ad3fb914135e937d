//! Backend setup form.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length, Theme};

use super::{muted_text, semibold};
use crate::message::{BackendSetupMessage, Message};
use crate::model::BackendSetupState;

/// Renders the backend setup form, shown when no backends are configured.
pub fn view_backend_setup(state: &BackendSetupState) -> Element<'static, Message> {
    let title = text("No backends found for your account.")
        .size(22)
        .font(semibold());

    let hint = text("Add the base URL of a message backend to start aggregating previews.")
        .size(14)
        .style(muted_text);

    let label_row = create_field_row("Label:", &state.label, "Work SMS (optional)", |s| {
        Message::BackendSetup(BackendSetupMessage::LabelChanged(s))
    });

    let url_row = create_field_row("Base URL:", &state.base_url, "https://sms.example.com", |s| {
        Message::BackendSetup(BackendSetupMessage::BaseUrlChanged(s))
    });

    let error: Element<'static, Message> = state.save_error.as_ref().map_or_else(
        || Space::new().height(Length::Fixed(20.0)).into(),
        |error| {
            text(error.clone())
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                })
                .into()
        },
    );

    let save_btn = if state.is_saving {
        button(text("Saving...").size(14))
            .padding([10, 20])
            .style(button::primary)
    } else {
        button(text("Save Backend").size(14))
            .padding([10, 20])
            .style(button::primary)
            .on_press(Message::BackendSetup(BackendSetupMessage::Save))
    };

    let form = column![
        title,
        hint,
        Space::new().height(Length::Fixed(16.0)),
        label_row,
        url_row,
        Space::new().height(Length::Fixed(12.0)),
        error,
        save_btn,
    ]
    .spacing(12)
    .max_width(520);

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}

/// Creates a labeled input field row.
fn create_field_row(
    label: &str,
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> Message + 'static,
) -> Element<'static, Message> {
    let label_text = text(label.to_string())
        .size(14)
        .width(Length::Fixed(90.0));

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10)
        .size(14)
        .width(Length::Fill);

    row![label_text, input]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .into()
}
