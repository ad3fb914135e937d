//! Core services for inbox operations.
//!
//! This module provides the service layer that bridges the GUI with the
//! backend REST surface.

pub mod inbox;

pub use inbox::{
    InboxEntry, InboxServiceError, load_conversation, load_inbox, send_message,
    sort_unresponded_first,
};
