//! Chat Message Data Structure
//!
//! Represents a message in the pair's conversation. Messages are append-only
//! from the client's perspective: created by sending, never edited or
//! deleted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRole;

fn default_message_type() -> String {
    "text".to_string()
}

/// A chat message as returned by the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Unique message id within the conversation
    pub id: String,
    /// Email of the sender
    #[serde(default)]
    pub sender_email: String,
    /// Display name of the sender
    #[serde(default)]
    pub sender_name: String,
    /// Role of the sender
    pub sender_role: UserRole,
    /// Message text body
    pub message: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Whether the recipient has read the message
    #[serde(default)]
    pub read: bool,
    /// Message content type; the service only produces "text" today
    #[serde(default = "default_message_type")]
    pub message_type: String,
}

/// Pagination metadata on the message list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub messages_per_page: u32,
    pub total_messages: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Response for listing messages (chronological order within the page)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Present when the server paginates; the client reads the first page
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Request to send a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub sender_type: UserRole,
}

/// Response after sending a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// Server status text, e.g. "Message sent successfully"
    #[serde(default)]
    pub message: String,
}
