//! Conversation Data Structure
//!
//! Represents the conversation between the static patient/doctor pair.
//! Conversations are owned by the remote API; the client holds a read-only
//! cached copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// A conversation between the two static users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Server record id
    pub id: String,
    /// Opaque conversation identifier, stable for the pair's lifetime
    pub conversation_id: String,
    /// Display name of the other participant
    #[serde(default)]
    pub other_user_name: String,
    /// Email of the other participant
    #[serde(default)]
    pub other_user_email: String,
    /// Role of the other participant
    #[serde(default)]
    pub other_user_role: Option<UserRole>,
    /// Preview text of the last message
    #[serde(default)]
    pub last_message: String,
    /// When the last message was sent
    #[serde(default)]
    pub last_message_time: Option<DateTime<Utc>>,
    /// Email of the last message's sender
    #[serde(default)]
    pub last_message_sender_email: String,
    /// Server-computed unread count for the viewing user; absent means zero
    #[serde(default)]
    pub unread_count: Option<u32>,
}

impl Conversation {
    /// Unread count, treating an absent value as zero
    pub fn unread(&self) -> u32 {
        self.unread_count.unwrap_or(0)
    }
}

/// Response for listing conversations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConversationsResponse {
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

/// Response after starting (or re-fetching) the pair's conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartConversationResponse {
    pub conversation_id: String,
    /// Server status text, e.g. "Conversation ready"
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_missing_is_zero() {
        let json = r#"{"id": "abc", "conversation_id": "abc"}"#;
        let conversation: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conversation.unread_count, None);
        assert_eq!(conversation.unread(), 0);
    }

    #[test]
    fn test_full_conversation_deserialization() {
        let json = r#"{
            "id": "64f0c2",
            "conversation_id": "64f0c2",
            "other_user_name": "Dr. Sarah Doctor",
            "other_user_email": "doctor@example.com",
            "other_user_role": "doctor",
            "last_message": "See you tomorrow",
            "last_message_time": "2026-08-28T10:15:00Z",
            "last_message_sender_email": "doctor@example.com",
            "unread_count": 3
        }"#;
        let conversation: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conversation.conversation_id, "64f0c2");
        assert_eq!(conversation.other_user_role, Some(UserRole::Doctor));
        assert_eq!(conversation.unread(), 3);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // The server is free to grow its payloads; older clients must
        // keep decoding.
        let json = r#"{
            "id": "64f0c2",
            "conversation_id": "64f0c2",
            "unread_count": 1,
            "archived": false,
            "priority": "routine"
        }"#;
        let conversation: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conversation.conversation_id, "64f0c2");
        assert_eq!(conversation.unread(), 1);
    }

    #[test]
    fn test_missing_conversations_list_is_empty() {
        let response: ListConversationsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.conversations.is_empty());
    }

    #[test]
    fn test_start_conversation_response() {
        let json = r#"{"conversation_id": "64f0c2", "message": "Conversation ready"}"#;
        let response: StartConversationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.conversation_id, "64f0c2");
        assert_eq!(response.message, "Conversation ready");
    }
}
