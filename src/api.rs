//! Message API Client
//!
//! This module provides async functions for the five remote operations of
//! the message service: static user lookup, conversation listing, message
//! listing, message sending and conversation start. Non-success statuses and
//! transport failures are normalized into [`ApiError`].

use reqwest::{Client, Response};

use crate::config::Config;
use crate::error::ApiError;
use crate::messaging::{
    ChatMessage, Conversation, ListConversationsResponse, ListMessagesResponse,
    SendMessageRequest, SendMessageResponse, StartConversationResponse, StaticUsers,
    StaticUsersResponse, UserRole,
};

/// Message API client
#[derive(Debug, Clone)]
pub struct MessageApiClient {
    config: Config,
    client: Client,
}

impl MessageApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up the static patient/doctor pair
    pub async fn get_static_users(&self) -> Result<StaticUsers, ApiError> {
        let url = self.config.api_url("/get-static-users");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;
        let response = check_status(response).await?;

        let users_response = response
            .json::<StaticUsersResponse>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(users_response.users)
    }

    /// Get conversations for the given user role
    pub async fn get_conversations(&self, user_type: UserRole) -> Result<Vec<Conversation>, ApiError> {
        let url = self.config.api_url("/conversations");

        let response = self
            .client
            .get(&url)
            .query(&[("user_type", user_type.as_str())])
            .send()
            .await
            .map_err(ApiError::Network)?;
        let response = check_status(response).await?;

        let list_response = response
            .json::<ListConversationsResponse>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(list_response.conversations)
    }

    /// Get messages for a conversation, scoped to the given user role
    pub async fn get_messages(
        &self,
        conversation_id: &str,
        user_type: UserRole,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        let url = self
            .config
            .api_url(&format!("/conversations/{}/messages", conversation_id));

        let response = self
            .client
            .get(&url)
            .query(&[("user_type", user_type.as_str())])
            .send()
            .await
            .map_err(ApiError::Network)?;
        let response = check_status(response).await?;

        let list_response = response
            .json::<ListMessagesResponse>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(list_response.messages)
    }

    /// Send a message in a conversation
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message: &str,
        sender_type: UserRole,
    ) -> Result<SendMessageResponse, ApiError> {
        let url = self
            .config
            .api_url(&format!("/conversations/{}/send", conversation_id));
        let request = SendMessageRequest {
            message: message.to_string(),
            sender_type,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Network)?;
        let response = check_status(response).await?;

        response
            .json::<SendMessageResponse>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// Start (or re-fetch) the pair's conversation
    pub async fn start_conversation(&self) -> Result<StartConversationResponse, ApiError> {
        let url = self.config.api_url("/conversations/start");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;
        let response = check_status(response).await?;

        response
            .json::<StartConversationResponse>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }
}

/// Turn a non-success response into an [`ApiError::Status`] carrying the
/// body text, like the send endpoint's error payloads.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| status.to_string());
    tracing::warn!(%status, "request failed: {}", body);
    Err(ApiError::Status { status, body })
}
