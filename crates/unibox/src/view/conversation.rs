//! Conversation pane.

use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Border, Element, Length, Theme};

use super::{muted_text, semibold};
use crate::message::Message;
use crate::model::Bubble;

/// Renders the conversation pane for the selected phone number.
pub fn view_conversation(
    phone: &str,
    bubbles: &[Bubble],
    show_skeleton: bool,
) -> Element<'static, Message> {
    let title = text(format!("Conversation with {phone}"))
        .size(18)
        .font(semibold());

    let body: Element<'static, Message> = if show_skeleton {
        view_skeleton()
    } else if bubbles.is_empty() {
        text("No messages yet.").size(14).into()
    } else {
        let rows: Vec<Element<'static, Message>> =
            bubbles.iter().map(view_bubble_row).collect();
        scrollable(iced::widget::Column::with_children(rows).spacing(10))
            .height(Length::Fill)
            .into()
    };

    container(column![title, body].spacing(14).padding([16, 24]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Renders the blank right pane shown before any selection.
pub fn view_blank() -> Element<'static, Message> {
    container(text("Select a conversation.").size(18).style(muted_text))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Renders one message bubble row, aligned by direction.
fn view_bubble_row(bubble: &Bubble) -> Element<'static, Message> {
    let outgoing = bubble.outgoing;

    let body = container(text(bubble.text.clone()).size(14))
        .padding([8, 12])
        .max_width(420)
        .style(move |theme: &Theme| bubble_style(theme, outgoing));

    let stamp = text(bubble.time.clone()).size(11).style(muted_text);

    let stack = column![body, stamp].spacing(4).align_x(if outgoing {
        iced::Alignment::End
    } else {
        iced::Alignment::Start
    });

    if outgoing {
        row![Space::new().width(Length::Fill), stack].into()
    } else {
        row![stack, Space::new().width(Length::Fill)].into()
    }
}

/// Two placeholder rows shown while a newly selected conversation performs
/// its first load: one outgoing, one incoming.
fn view_skeleton() -> Element<'static, Message> {
    let placeholder = |outgoing: bool| -> Element<'static, Message> {
        let body = container(Space::new().width(Length::Fixed(120.0)).height(Length::Fixed(16.0)))
            .padding([8, 12])
            .style(move |theme: &Theme| bubble_style(theme, outgoing));

        let stamp = container(Space::new().width(Length::Fixed(40.0)).height(Length::Fixed(8.0)))
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(palette.background.weak.color.into()),
                    border: Border {
                        radius: 3.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }
            });

        let stack = column![body, stamp].spacing(4).align_x(if outgoing {
            iced::Alignment::End
        } else {
            iced::Alignment::Start
        });

        if outgoing {
            row![Space::new().width(Length::Fill), stack].into()
        } else {
            row![stack, Space::new().width(Length::Fill)].into()
        }
    };

    column![placeholder(true), placeholder(false)]
        .spacing(10)
        .into()
}

/// Bubble background: tinted for outgoing, neutral for incoming.
fn bubble_style(theme: &Theme, outgoing: bool) -> container::Style {
    let palette = theme.extended_palette();
    let pair = if outgoing {
        palette.primary.weak
    } else {
        palette.background.weak
    };
    container::Style {
        background: Some(pair.color.into()),
        text_color: Some(pair.text),
        border: Border {
            radius: 10.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
