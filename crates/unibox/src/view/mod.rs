//! View components for the inbox client.

mod compose;
mod conversation;
mod preview_list;
mod setup;

pub use compose::view_compose;
pub use conversation::{view_blank, view_conversation};
pub use preview_list::view_preview_list;
pub use setup::view_backend_setup;

use iced::widget::text;
use iced::Theme;

/// Muted text style for timestamps and secondary copy.
fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}

/// Semibold font used for headings and sender lines.
fn semibold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Semibold,
        ..Default::default()
    }
}
