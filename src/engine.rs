//! Sync Engine
//!
//! Single source of truth for conversation/message state for one user
//! identity. All reads and writes to the remote API go through the engine,
//! which also manages the polling lifecycle that keeps messages fresh while
//! a conversation is active.
//!
//! # Failure Semantics
//!
//! Every network-backed operation contains its own failures: transport and
//! HTTP errors are mapped to a short human-readable string in the `error`
//! state slot (last error wins) and the operation returns a falsy/absent
//! result. Nothing re-raises to the caller.
//!
//! # Stale Responses
//!
//! Operations triggered by distinct user actions are not guaranteed to
//! resolve in invocation order. Every message fetch therefore captures the
//! conversation id it targets at dispatch time, and the result is applied
//! only if that id still matches the active conversation when the response
//! arrives; otherwise it is discarded.

use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::api::MessageApiClient;
use crate::config::Config;
use crate::messaging::{ChatMessage, Conversation, StaticUsers, UserRole};

/// Client-local, transient engine state.
///
/// A cloned snapshot of this struct is what the presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    /// Cached conversation list, in server-defined order
    pub conversations: Vec<Conversation>,
    /// The conversation currently selected for display and polling
    pub active_conversation: Option<Conversation>,
    /// Messages of the active conversation, chronological
    pub messages: Vec<ChatMessage>,
    /// Whether a load is in flight
    pub loading: bool,
    /// Last contained failure, if not yet dismissed
    pub error: Option<String>,
}

impl EngineState {
    /// Total unread messages across all conversations; a missing count is
    /// treated as zero. Pure, mutates nothing.
    pub fn unread_count(&self) -> u32 {
        self.conversations.iter().map(Conversation::unread).sum()
    }
}

struct EngineInner {
    api: MessageApiClient,
    role: UserRole,
    state: RwLock<EngineState>,
    users: RwLock<Option<StaticUsers>>,
}

impl EngineInner {
    /// Shared message-load path, used by explicit loads, send refresh and
    /// the polling task.
    async fn load_messages(&self, conversation_id: &str) {
        if conversation_id.trim().is_empty() {
            self.state.write().await.messages.clear();
            return;
        }

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.api.get_messages(conversation_id, self.role).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(messages) => {
                let still_active = state
                    .active_conversation
                    .as_ref()
                    .map(|c| c.conversation_id.as_str())
                    == Some(conversation_id);
                if still_active {
                    state.messages = messages;
                } else {
                    tracing::debug!(%conversation_id, "discarding stale message response");
                }
            }
            Err(err) => {
                tracing::warn!(%conversation_id, "failed to load messages: {err}");
                state.error = Some("Failed to load messages".to_string());
            }
        }
    }
}

/// The sync engine, bound to one user identity.
///
/// Created at session start and torn down when the user navigates away;
/// there is no persistent storage, every instance re-fetches from the
/// remote API.
pub struct SyncEngine {
    inner: Arc<EngineInner>,
    poller: Mutex<Option<JoinHandle<()>>>,
}

impl SyncEngine {
    /// Create an engine for the given user role
    pub fn new(config: Config, role: UserRole) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                api: MessageApiClient::new(config),
                role,
                state: RwLock::new(EngineState::default()),
                users: RwLock::new(None),
            }),
            poller: Mutex::new(None),
        }
    }

    /// The role this engine is bound to
    pub fn role(&self) -> UserRole {
        self.inner.role
    }

    /// Cloned snapshot of the current state
    pub async fn state(&self) -> EngineState {
        self.inner.state.read().await.clone()
    }

    /// The cached static user pair, if [`load_users`](Self::load_users)
    /// has succeeded
    pub async fn users(&self) -> Option<StaticUsers> {
        self.inner.users.read().await.clone()
    }

    /// Fetch and cache the static patient/doctor pair.
    ///
    /// Returns whether the lookup succeeded; failure is also surfaced
    /// through the `error` state slot.
    pub async fn load_users(&self) -> bool {
        match self.inner.api.get_static_users().await {
            Ok(users) => {
                *self.inner.users.write().await = Some(users);
                true
            }
            Err(err) => {
                tracing::warn!("failed to load users: {err}");
                self.inner.state.write().await.error = Some("Failed to load users".to_string());
                false
            }
        }
    }

    /// Load the conversation list, replacing the cached copy.
    ///
    /// If no conversation is active yet, the first returned conversation
    /// becomes active and polling starts for it. Idempotent and safe to
    /// call repeatedly; `loading` is cleared on every exit path.
    pub async fn load_conversations(&self) {
        {
            let mut state = self.inner.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.inner.api.get_conversations(self.inner.role).await {
            Ok(conversations) => {
                let activated = {
                    let mut state = self.inner.state.write().await;
                    state.conversations = conversations;
                    state.loading = false;
                    if state.active_conversation.is_none() {
                        state.active_conversation = state.conversations.first().cloned();
                        state.active_conversation.clone()
                    } else {
                        None
                    }
                };
                if let Some(conversation) = activated {
                    tracing::debug!(
                        conversation_id = %conversation.conversation_id,
                        "auto-selected first conversation"
                    );
                    self.start_polling(conversation.conversation_id);
                }
            }
            Err(err) => {
                tracing::warn!("failed to load conversations: {err}");
                let mut state = self.inner.state.write().await;
                state.loading = false;
                state.error = Some("Failed to load conversations".to_string());
            }
        }
    }

    /// Load the messages of a conversation, replacing `messages`.
    ///
    /// An empty id clears `messages` without a network call. A response
    /// arriving after the active conversation changed is discarded.
    pub async fn load_messages(&self, conversation_id: &str) {
        self.inner.load_messages(conversation_id).await;
    }

    /// Send a message, then reload messages and conversations concurrently
    /// to pull authoritative state (server-assigned id and timestamp, plus
    /// updated unread counts). No optimistic local insert.
    ///
    /// Returns `false` without a network call when the id is empty or the
    /// trimmed text is empty, and on send failure (with `error` set).
    pub async fn send_message(&self, conversation_id: &str, text: &str) -> bool {
        let text = text.trim();
        if conversation_id.trim().is_empty() || text.is_empty() {
            return false;
        }

        match self
            .inner
            .api
            .send_message(conversation_id, text, self.inner.role)
            .await
        {
            Ok(_) => {
                tokio::join!(
                    self.inner.load_messages(conversation_id),
                    self.load_conversations(),
                );
                true
            }
            Err(err) => {
                tracing::warn!(%conversation_id, "failed to send message: {err}");
                self.inner.state.write().await.error =
                    Some("Failed to send message".to_string());
                false
            }
        }
    }

    /// Ask the server to create (or hand back) the pair's conversation,
    /// then reload the conversation list.
    ///
    /// Returns the conversation id, or `None` on failure with `error` set.
    pub async fn start_conversation(&self) -> Option<String> {
        match self.inner.api.start_conversation().await {
            Ok(response) => {
                self.load_conversations().await;
                Some(response.conversation_id)
            }
            Err(err) => {
                tracing::warn!("failed to start conversation: {err}");
                self.inner.state.write().await.error =
                    Some("Failed to start conversation".to_string());
                None
            }
        }
    }

    /// Select the active conversation.
    ///
    /// `Some` restarts the polling task for it (whose first tick loads the
    /// messages immediately); `None` cancels polling and clears `messages`
    /// with no network call.
    pub async fn select_conversation(&self, conversation: Option<Conversation>) {
        match conversation {
            Some(conversation) => {
                let conversation_id = conversation.conversation_id.clone();
                self.inner.state.write().await.active_conversation = Some(conversation);
                self.start_polling(conversation_id);
            }
            None => {
                self.stop_polling();
                let mut state = self.inner.state.write().await;
                state.active_conversation = None;
                state.messages.clear();
            }
        }
    }

    /// Total unread messages across all conversations
    pub async fn unread_count(&self) -> u32 {
        self.inner.state.read().await.unread_count()
    }

    /// Dismiss the current error, touching nothing else
    pub async fn clear_error(&self) {
        self.inner.state.write().await.error = None;
    }

    /// Replace any running polling task with one for the given conversation.
    /// At most one task is live per engine; the previous one is aborted
    /// before the new one starts.
    fn start_polling(&self, conversation_id: String) {
        let inner = Arc::clone(&self.inner);
        let interval = self.inner.api.config().poll_interval();

        let mut guard = self.poller.lock().expect("poller lock");
        if let Some(handle) = guard.take() {
            handle.abort();
        }
        tracing::debug!(%conversation_id, "starting message polling");
        *guard = Some(tokio::spawn(async move {
            // First tick completes immediately, so activation doubles as the
            // initial message load.
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                inner.load_messages(&conversation_id).await;
            }
        }));
    }

    fn stop_polling(&self) {
        if let Some(handle) = self.poller.lock().expect("poller lock").take() {
            tracing::debug!("stopping message polling");
            handle.abort();
        }
    }
}

impl Drop for SyncEngine {
    fn drop(&mut self) {
        self.stop_polling();
    }
}
