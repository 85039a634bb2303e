//! Messaging Module
//!
//! This module contains the wire data structures for the messaging system:
//!
//! - `User` / `UserRole` - The two static participants
//! - `Conversation` - The conversation between the pair
//! - `ChatMessage` - A message in a conversation
//!
//! Each endpoint has a matching request/response wrapper type so payloads
//! stay field-keyed on the wire.

pub mod conversation;
pub mod message;
pub mod user;

// Re-export all types
pub use conversation::{Conversation, ListConversationsResponse, StartConversationResponse};
pub use message::{
    ChatMessage, ListMessagesResponse, Pagination, SendMessageRequest, SendMessageResponse,
};
pub use user::{StaticUsers, StaticUsersResponse, User, UserRole};
