//! # unibox-core
//!
//! Core logic for the unibox unified-inbox client.
//!
//! This crate provides:
//! - Backend registry (`SQLite` storage of configured endpoints)
//! - Backend validation
//! - Inbox aggregation service (fan-out fetch, flatten, urgency sort)
//! - Conversation fetch and outbound send

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod backend;
mod error;
pub mod service;

pub use backend::{
    Backend, BackendId, BackendRepository, ValidationError, ValidationResult, validate_backend,
};
pub use error::{Error, Result};
pub use service::{
    InboxEntry, InboxServiceError, load_conversation, load_inbox, send_message,
    sort_unresponded_first,
};
