//! Preview list pane.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Border, Element, Length, Theme};

use super::{muted_text, semibold};
use crate::message::Message;
use crate::model::{ConversationKey, PreviewEntry};

/// Fixed width of the left pane.
const PANE_WIDTH: f32 = 320.0;

/// Renders the left pane: inbox header plus the scrollable preview list.
pub fn view_preview_list(
    previews: &[PreviewEntry],
    selected: Option<&ConversationKey>,
) -> Element<'static, Message> {
    let header = row![
        text("Unified Inbox").size(18).font(semibold()),
        iced::widget::Space::new().width(Length::Fill),
        button(text("Send Message").size(13))
            .padding([8, 14])
            .style(button::primary)
            .on_press(Message::ComposeNew),
    ]
    .align_y(iced::Alignment::Center);

    let body: Element<'static, Message> = if previews.is_empty() {
        container(text("Inbox is empty.").size(14).style(muted_text))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    } else {
        let cards: Vec<Element<'static, Message>> = previews
            .iter()
            .map(|preview| view_preview_card(preview, selected))
            .collect();
        scrollable(Column::with_children(cards).spacing(10))
            .height(Length::Fill)
            .into()
    };

    container(column![header, body].spacing(14).padding(16))
        .width(Length::Fixed(PANE_WIDTH))
        .height(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}

/// Renders one clickable preview card.
fn view_preview_card(
    preview: &PreviewEntry,
    selected: Option<&ConversationKey>,
) -> Element<'static, Message> {
    let key = preview.key();
    let is_active = selected == Some(&key);

    let snippet = if preview.from_you {
        format!("{} (You)", preview.snippet)
    } else {
        preview.snippet.clone()
    };
    let snippet_font = if preview.unread {
        iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        }
    } else {
        iced::Font::default()
    };

    let content = column![
        text(format!("From: {}", preview.phone_number))
            .size(13)
            .font(semibold()),
        text(snippet).size(14).font(snippet_font),
        text(preview.timestamp.clone()).size(11).style(muted_text),
    ]
    .spacing(4);

    button(content)
        .width(Length::Fill)
        .padding(12)
        .style(move |theme: &Theme, _status| {
            let palette = theme.extended_palette();
            button::Style {
                background: Some(if is_active {
                    palette.background.weak.color.into()
                } else {
                    palette.background.base.color.into()
                }),
                text_color: palette.background.base.text,
                border: Border {
                    color: if is_active {
                        palette.primary.strong.color
                    } else {
                        palette.background.strong.color
                    },
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..button::Style::default()
            }
        })
        .on_press(Message::SelectPreview(key))
        .into()
}
