//! # unibox-rest
//!
//! Typed async client for the REST surface exposed by unibox message
//! backends. Every backend speaks the same three-endpoint protocol:
//!
//! - `GET /messages`: message previews for the whole inbox
//! - `GET /conversation?phone=...`: one conversation thread
//! - `POST /send-message`: send a new outbound message
//!
//! All payloads are JSON with camelCase field names. Responses with a
//! non-success status are surfaced as [`Error::Status`] carrying the
//! response body text, which backends use for human-readable diagnostics.
//!
//! ## Quick Start
//!
//! ```ignore
//! use unibox_rest::{BackendClient, SendMessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> unibox_rest::Result<()> {
//!     let client = BackendClient::new("https://sms.example.com");
//!
//!     for preview in client.messages().await? {
//!         println!("{}: {}", preview.phone_number, preview.snippet);
//!     }
//!
//!     let thread = client.conversation("+15551234567").await?;
//!     println!("{} messages in thread", thread.len());
//!
//!     let status = client
//!         .send_message(&SendMessageRequest::new("+15551234567", "hello"))
//!         .await?;
//!     println!("backend said: {status}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod types;

pub use client::BackendClient;
pub use error::{Error, Result};
pub use types::{ConversationMessage, Direction, MessagePreview, SendMessageRequest};
