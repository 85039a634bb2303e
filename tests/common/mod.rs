//! Shared helpers for integration tests
//!
//! JSON payload builders matching the remote API's response shapes.

use serde_json::{json, Value};

/// Conversation payload as produced by `GET /conversations`
pub fn conversation_json(id: &str, unread: Option<u32>) -> Value {
    json!({
        "id": id,
        "conversation_id": id,
        "other_user_name": "Dr. Sarah Doctor",
        "other_user_email": "doctor@example.com",
        "other_user_role": "doctor",
        "last_message": "",
        "last_message_time": null,
        "last_message_sender_email": "",
        "unread_count": unread,
    })
}

/// Message payload as produced by `GET /conversations/{id}/messages`
pub fn message_json(id: &str, text: &str, role: &str) -> Value {
    json!({
        "id": id,
        "sender_email": format!("{}@example.com", role),
        "sender_name": "John Patient",
        "sender_role": role,
        "message": text,
        "timestamp": "2026-08-28T10:15:00Z",
        "read": false,
        "message_type": "text",
    })
}

/// Static user pair payload as produced by `GET /get-static-users`
pub fn users_json() -> Value {
    json!({
        "users": {
            "patient": {
                "id": "patient_1",
                "name": "John Patient",
                "email": "patient@example.com",
                "role": "patient"
            },
            "doctor": {
                "id": "doctor_1",
                "name": "Dr. Sarah Doctor",
                "email": "doctor@example.com",
                "role": "doctor"
            }
        }
    })
}
