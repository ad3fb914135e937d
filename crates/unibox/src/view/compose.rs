//! New-message form.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length, Theme};

use super::semibold;
use crate::message::{ComposeMessage, Message};
use crate::model::{BackendChoice, ComposeState};

/// Renders the new-message form in the right pane.
pub fn view_compose(
    state: &ComposeState,
    choices: Vec<BackendChoice>,
) -> Element<'static, Message> {
    let title = text("Send a brand-new message").size(18).font(semibold());

    let backend_label = text("Backend:")
        .size(14)
        .width(Length::Fixed(80.0));
    let backend_picker = pick_list(choices, state.backend.clone(), |choice| {
        Message::Compose(ComposeMessage::BackendSelected(choice))
    })
    .placeholder("Choose a backend")
    .padding(10)
    .text_size(14)
    .width(Length::Fill);
    let backend_row = row![backend_label, backend_picker]
        .spacing(12)
        .align_y(iced::Alignment::Center);

    let phone_row = create_field_row("Phone:", &state.phone_number, "+15551234567", |s| {
        Message::Compose(ComposeMessage::PhoneChanged(s))
    });

    let body_row = create_field_row("Message:", &state.body, "Write your message here...", |s| {
        Message::Compose(ComposeMessage::BodyChanged(s))
    });

    // Status line: "Sending new message...", the backend's raw response
    // text, or "Error: ...".
    let status: Element<'static, Message> = state.status.as_ref().map_or_else(
        || Space::new().height(Length::Fixed(20.0)).into(),
        |status| {
            text(status.clone())
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                })
                .into()
        },
    );

    let send_btn = if state.is_sending {
        button(text("Sending...").size(14))
            .padding([10, 20])
            .style(button::primary)
    } else {
        button(text("Send Message").size(14))
            .padding([10, 20])
            .style(button::primary)
            .on_press(Message::Compose(ComposeMessage::Send))
    };

    let cancel_btn = button(text("Cancel").size(14))
        .padding([10, 20])
        .style(button::secondary)
        .on_press(Message::Compose(ComposeMessage::Cancel));

    let buttons = row![send_btn, cancel_btn].spacing(12);

    let content = column![
        title,
        Space::new().height(Length::Fixed(16.0)),
        backend_row,
        phone_row,
        body_row,
        Space::new().height(Length::Fixed(12.0)),
        status,
        buttons,
    ]
    .spacing(12)
    .padding(24)
    .width(Length::Fill);

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
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
        .width(Length::Fixed(80.0));

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
