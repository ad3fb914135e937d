//! Unibox - desktop unified inbox for user-configured message backends.
//!
//! Aggregates message previews from every configured backend, floats
//! unresponded conversations to the top, and refreshes on a fixed interval.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod view;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unibox_core::{Backend, BackendRepository, InboxEntry};
use unibox_rest::ConversationMessage;

use message::{BackendSetupMessage, ComposeMessage, KeyboardAction, Message, View};
use model::{
    AppSettings, BackendChoice, BackendSetupState, Bubble, ComposeState, ConversationKey,
    PreviewEntry,
};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unibox=debug,unibox_core=debug,unibox_rest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Unibox");

    iced::application(Unibox::new, Unibox::update, Unibox::view)
        .title("Unibox")
        .subscription(Unibox::subscription)
        .run()
}

/// Main application state.
struct Unibox {
    /// Current view/screen.
    current_view: View,
    /// Persisted settings (poll interval).
    settings: AppSettings,
    /// Configured backends, in repository order. Previews refer to backends
    /// by index into this list.
    backends: Vec<Backend>,
    /// Merged preview list, unresponded entries first.
    previews: Vec<PreviewEntry>,
    /// Currently open conversation, if any.
    selected: Option<ConversationKey>,
    /// Messages of the open conversation.
    conversation: Vec<Bubble>,
    /// Whether the open conversation has loaded at least once. The skeleton
    /// is only shown before the first successful load.
    conversation_has_loaded: bool,
    /// Whether a conversation load is in flight.
    loading_conversation: bool,
    /// Whether the right pane shows the new-message form.
    show_new_form: bool,
    /// New-message form state.
    compose: ComposeState,
    /// Backend setup form state.
    setup: BackendSetupState,
    /// Error banner text, shown above the inbox panes.
    error_message: Option<String>,
}

impl Default for Unibox {
    fn default() -> Self {
        Self {
            current_view: View::Inbox,
            settings: AppSettings::default(),
            backends: Vec::new(),
            previews: Vec::new(),
            selected: None,
            conversation: Vec::new(),
            conversation_has_loaded: false,
            loading_conversation: false,
            show_new_form: false,
            compose: ComposeState::new(),
            setup: BackendSetupState::new(),
            error_message: None,
        }
    }
}

impl Unibox {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        // On startup, load settings and the configured backends
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        let backends_task = Task::perform(load_backends(), Message::BackendsLoaded);
        (Self::default(), Task::batch([settings_task, backends_task]))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    info!("Settings loaded: poll every {}s", settings.poll_interval_secs);
                    self.settings = settings;
                }
                Err(e) => {
                    info!("Failed to load settings, using defaults: {e}");
                }
            },
            Message::BackendsLoaded(result) => match result {
                Ok(backends) => {
                    info!("Loaded {} backends", backends.len());
                    self.backends = backends;
                    if self.backends.is_empty() {
                        self.current_view = View::BackendSetup;
                    } else {
                        self.current_view = View::Inbox;
                        self.compose = ComposeState::with_default_backend(&self.backends);
                        return self.refresh_tasks();
                    }
                }
                Err(e) => {
                    self.error_message = Some(format!("Failed to load backends: {e}"));
                }
            },
            Message::Tick => {
                return self.refresh_tasks();
            }
            Message::InboxLoaded(result) => match result {
                Ok(entries) => {
                    self.previews = entries.iter().map(PreviewEntry::from_core).collect();
                }
                Err(e) => {
                    // Keep the previous list on screen; the next tick retries.
                    error!("Inbox refresh failed: {e}");
                }
            },
            Message::SelectPreview(key) => {
                self.show_new_form = false;
                self.compose.status = None;
                self.selected = Some(key.clone());

                // Reset so the next load shows the skeleton again
                self.conversation.clear();
                self.conversation_has_loaded = false;

                if let Some(backend) = self.backends.get(key.backend_index).cloned() {
                    self.loading_conversation = true;
                    return conversation_task(backend, key);
                }
            }
            Message::ConversationLoaded { key, result } => {
                if self.selected.as_ref() != Some(&key) {
                    // Result for a conversation that is no longer selected.
                    return Task::none();
                }
                self.loading_conversation = false;
                match result {
                    Ok(messages) => {
                        self.conversation = messages.iter().map(Bubble::from_core).collect();
                        self.conversation_has_loaded = true;
                    }
                    Err(e) => {
                        warn!("Conversation load failed: {e}");
                    }
                }
            }
            Message::ComposeNew => {
                self.selected = None;
                self.conversation.clear();
                self.conversation_has_loaded = false;
                self.show_new_form = true;
                self.compose.status = None;
            }
            Message::Compose(msg) => {
                return self.handle_compose(msg);
            }
            Message::MessageSent(result) => {
                self.compose.is_sending = false;
                match result {
                    Ok(status_text) => {
                        // The backend's raw response text is the status line
                        self.compose.status = Some(status_text);
                        self.compose.clear_after_send();
                    }
                    Err(e) => {
                        self.compose.status = Some(format!("Error: {e}"));
                    }
                }
            }
            Message::BackendSetup(msg) => {
                return self.handle_backend_setup(msg);
            }
            Message::BackendSaved(result) => {
                self.setup.is_saving = false;
                match result {
                    Ok(()) => {
                        self.setup = BackendSetupState::new();
                        return Task::perform(load_backends(), Message::BackendsLoaded);
                    }
                    Err(e) => {
                        self.setup.save_error = Some(e);
                    }
                }
            }
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
            Message::Noop => {}
        }
        Task::none()
    }

    /// Refresh the inbox and, if one is open, the selected conversation.
    fn refresh_tasks(&self) -> Task<Message> {
        if self.backends.is_empty() {
            return Task::none();
        }

        let mut tasks = vec![Task::perform(
            refresh_inbox(self.backends.clone()),
            Message::InboxLoaded,
        )];

        if let Some(key) = self.selected.clone()
            && let Some(backend) = self.backends.get(key.backend_index).cloned()
        {
            tasks.push(conversation_task(backend, key));
        }

        Task::batch(tasks)
    }

    /// Handle compose form messages.
    fn handle_compose(&mut self, msg: ComposeMessage) -> Task<Message> {
        match msg {
            ComposeMessage::BackendSelected(choice) => {
                self.compose.backend = Some(choice);
            }
            ComposeMessage::PhoneChanged(phone) => {
                self.compose.phone_number = phone;
            }
            ComposeMessage::BodyChanged(body) => {
                self.compose.body = body;
            }
            ComposeMessage::Send => {
                if let Some(error) = self.compose.validate() {
                    self.compose.status = Some(error);
                } else if let Some(choice) = self.compose.backend.clone() {
                    if let Some(backend) = self.backends.get(choice.index).cloned() {
                        self.compose.is_sending = true;
                        self.compose.status = Some("Sending new message...".to_string());
                        let phone = self.compose.phone_number.clone();
                        let body = self.compose.body.clone();
                        return Task::perform(
                            send_new_message(backend, phone, body),
                            Message::MessageSent,
                        );
                    }
                    self.compose.status = Some("Error: Invalid backend index".to_string());
                }
            }
            ComposeMessage::Cancel => {
                self.show_new_form = false;
                self.compose.status = None;
            }
        }
        Task::none()
    }

    /// Handle backend setup form messages.
    fn handle_backend_setup(&mut self, msg: BackendSetupMessage) -> Task<Message> {
        match msg {
            BackendSetupMessage::LabelChanged(label) => {
                self.setup.label = label;
            }
            BackendSetupMessage::BaseUrlChanged(base_url) => {
                self.setup.base_url = base_url;
            }
            BackendSetupMessage::Save => {
                if self.setup.validate() {
                    self.setup.is_saving = true;
                    return Task::perform(
                        save_backend(self.setup.to_backend()),
                        Message::BackendSaved,
                    );
                }
            }
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::ComposeNew => {
                if self.current_view == View::Inbox {
                    return Task::done(Message::ComposeNew);
                }
            }
            KeyboardAction::Send => {
                if self.show_new_form {
                    return Task::done(Message::Compose(ComposeMessage::Send));
                }
            }
            KeyboardAction::Cancel => {
                if self.show_new_form {
                    self.show_new_form = false;
                    self.compose.status = None;
                } else {
                    // Clear selection
                    self.selected = None;
                    self.conversation.clear();
                    self.conversation_has_loaded = false;
                }
            }
            KeyboardAction::Refresh => {
                if self.current_view == View::Inbox {
                    return self.refresh_tasks();
                }
            }
        }
        Task::none()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        match self.current_view {
            View::Inbox => self.view_inbox(),
            View::BackendSetup => view::view_backend_setup(&self.setup),
        }
    }

    /// Main inbox view with two panes.
    fn view_inbox(&self) -> Element<'_, Message> {
        let left = view::view_preview_list(&self.previews, self.selected.as_ref());

        let right: Element<'_, Message> = if self.show_new_form {
            view::view_compose(&self.compose, BackendChoice::list(&self.backends))
        } else if let Some(key) = &self.selected {
            let show_skeleton = self.loading_conversation && !self.conversation_has_loaded;
            view::view_conversation(&key.phone, &self.conversation, show_skeleton)
        } else {
            view::view_blank()
        };

        let panes = row![left, right].height(Length::Fill);

        match &self.error_message {
            Some(error) => {
                let banner = container(text(error.clone()).size(13).style(|theme: &Theme| {
                    text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    }
                }))
                .width(Length::Fill)
                .padding([6, 12]);

                column![banner, panes]
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
            None => panes.into(),
        }
    }

    /// Subscribe to the poll timer and keyboard shortcuts.
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Noop)
            } else {
                Message::Noop
            }
        });

        // Nothing to poll until a backend is configured
        if self.backends.is_empty() {
            return keys;
        }

        let poll = iced::time::every(self.settings.poll_interval()).map(|_| Message::Tick);
        Subscription::batch([poll, keys])
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        // Ctrl+N: new message form
        Key::Character(c) if ctrl && c.as_str() == "n" => {
            Some(Message::KeyPressed(KeyboardAction::ComposeNew))
        }
        // Ctrl+Enter: send the message being composed
        Key::Named(keyboard::key::Named::Enter) if ctrl => {
            Some(Message::KeyPressed(KeyboardAction::Send))
        }
        // Escape: close form / clear selection
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        // F5: refresh now
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        _ => None,
    }
}

/// Spawn a conversation load whose result carries its key, so stale results
/// can be discarded after a selection change.
fn conversation_task(backend: Backend, key: ConversationKey) -> Task<Message> {
    let phone = key.phone.clone();
    Task::perform(refresh_conversation(backend, phone), move |result| {
        Message::ConversationLoaded {
            key: key.clone(),
            result,
        }
    })
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("unibox")
        .join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Open the backend repository in the per-user data directory.
async fn open_repository() -> Result<BackendRepository, String> {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("unibox");

    std::fs::create_dir_all(&data_dir).map_err(|e| e.to_string())?;

    let db_path = data_dir.join("unibox.db");
    BackendRepository::new(db_path.to_str().unwrap_or("unibox.db"))
        .await
        .map_err(|e| e.to_string())
}

/// Load the configured backends from the local store.
async fn load_backends() -> Result<Vec<Backend>, String> {
    let repo = open_repository().await?;
    repo.list().await.map_err(|e| e.to_string())
}

/// Save a backend to the local store.
async fn save_backend(mut backend: Backend) -> Result<(), String> {
    let repo = open_repository().await?;
    repo.save(&mut backend).await.map_err(|e| e.to_string())?;

    info!("Backend saved: {}", backend.base_url);
    Ok(())
}

/// Fetch and merge previews from every backend.
async fn refresh_inbox(backends: Vec<Backend>) -> Result<Vec<InboxEntry>, String> {
    unibox_core::load_inbox(&backends)
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the conversation thread for one phone number.
async fn refresh_conversation(
    backend: Backend,
    phone: String,
) -> Result<Vec<ConversationMessage>, String> {
    unibox_core::load_conversation(&backend, &phone)
        .await
        .map_err(|e| e.to_string())
}

/// Send a new outbound message, returning the backend's raw response text.
async fn send_new_message(
    backend: Backend,
    phone: String,
    text: String,
) -> Result<String, String> {
    unibox_core::send_message(&backend, &phone, &text)
        .await
        .map_err(|e| e.to_string())
}
