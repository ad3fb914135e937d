//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use crate::model::{AppSettings, BackendChoice, ConversationKey};
use unibox_core::{Backend, InboxEntry};
use unibox_rest::ConversationMessage;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// Backends loaded from the local store.
    BackendsLoaded(Result<Vec<Backend>, String>),

    // Polling
    /// Poll timer fired; refresh the inbox and the selected conversation.
    Tick,
    /// Inbox refresh finished.
    InboxLoaded(Result<Vec<InboxEntry>, String>),
    /// Conversation refresh finished. The key identifies which conversation
    /// was fetched; results for a no-longer-selected conversation are
    /// discarded.
    ConversationLoaded {
        /// Conversation this result belongs to.
        key: ConversationKey,
        /// Fetched thread, or the error text.
        result: Result<Vec<ConversationMessage>, String>,
    },

    // Selection
    /// A preview was clicked; open its conversation.
    SelectPreview(ConversationKey),

    // Compose
    /// Open the new-message form.
    ComposeNew,
    /// Compose form messages.
    Compose(ComposeMessage),
    /// Send attempt finished; Ok carries the backend's raw response text.
    MessageSent(Result<String, String>),

    // Backend setup
    /// Backend setup form messages.
    BackendSetup(BackendSetupMessage),
    /// Backend saved to the local store.
    BackendSaved(Result<(), String>),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event that requires no state change.
    Noop,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Open the new-message form (Ctrl+N).
    ComposeNew,
    /// Send the message being composed (Ctrl+Enter).
    Send,
    /// Close the form or clear the selection (Escape).
    Cancel,
    /// Refresh the inbox now (F5).
    Refresh,
}

/// Messages for the compose form.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// Target backend picked.
    BackendSelected(BackendChoice),
    /// Phone number changed.
    PhoneChanged(String),
    /// Message body changed.
    BodyChanged(String),
    /// Send the message.
    Send,
    /// Close the form.
    Cancel,
}

/// Messages for the backend setup form.
#[derive(Debug, Clone)]
pub enum BackendSetupMessage {
    /// Label changed.
    LabelChanged(String),
    /// Base URL changed.
    BaseUrlChanged(String),
    /// Save the backend.
    Save,
}

/// Application views/screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Main two-pane inbox view.
    #[default]
    Inbox,
    /// Backend setup form, shown when no backends are configured.
    BackendSetup,
}
