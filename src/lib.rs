//! MediConnect Client - Main Library
//!
//! Client-side synchronization engine for the MediConnect two-party
//! messaging service: a fixed patient and doctor pair exchange text messages
//! in a single conversation hosted by a remote HTTP API.
//!
//! # Overview
//!
//! This library provides the core client functionality:
//! - Conversation discovery and message retrieval
//! - Send-with-refresh semantics (authoritative reload, no optimistic insert)
//! - Polling-based live update while a conversation is active
//! - Derived state: unread totals, active-conversation selection, error surfacing
//!
//! # Module Structure
//!
//! - **`messaging`** - Wire data structures shared with the remote API
//!   (users, conversations, messages, request/response wrappers)
//! - **`api`** - HTTP client for the five remote operations
//! - **`engine`** - The sync engine: state, operations, polling lifecycle
//! - **`config`** - API base URL and poll interval configuration
//! - **`error`** - API error types
//! - **`timefmt`** - Timestamp formatting helpers for display
//!
//! # Usage
//!
//! ```rust,no_run
//! use mediconnect_client::{Config, SyncEngine, UserRole};
//!
//! # async fn example() {
//! let engine = SyncEngine::new(Config::new(), UserRole::Patient);
//! engine.load_conversations().await;
//! let state = engine.state().await;
//! println!("{} unread", state.unread_count());
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Engine state is held behind `Arc<tokio::sync::RwLock<_>>` and mutated
//! only by the engine's own async operations; the polling task shares the
//! same state through the engine internals. No additional threads are
//! spawned.
//!
//! # Error Handling
//!
//! Engine operations never propagate raw transport faults to the caller:
//! each operation catches its own failures, records a short human-readable
//! message in the `error` state slot, and returns a falsy/absent result.
//! The underlying typed errors live in [`error::ApiError`].

/// Wire data structures shared with the remote API
pub mod messaging;

/// HTTP client for the remote message API
pub mod api;

/// Sync engine state and operations
pub mod engine;

/// Client configuration
pub mod config;

/// Error types
pub mod error;

/// Timestamp formatting helpers
pub mod timefmt;

pub use api::MessageApiClient;
pub use config::Config;
pub use engine::{EngineState, SyncEngine};
pub use error::ApiError;
pub use messaging::{ChatMessage, Conversation, StaticUsers, User, UserRole};
