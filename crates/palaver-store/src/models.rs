//! Domain model structs shared by the history store and its callers.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to a presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// UserId
// ---------------------------------------------------------------------------

/// A user identity.  Plain display name, compared case-sensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single chat message.  Immutable once constructed; the history only
/// ever stores fully built records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique message identifier.  Informational only: ordering and
    /// queries never key on it.
    pub id: Uuid,
    /// Who sent the message.
    pub sender: UserId,
    /// Who the message is addressed to.
    pub recipient: UserId,
    /// When the message was created (send time, not arrival time).
    pub timestamp: DateTime<Utc>,
    /// Plain-text message body.
    pub content: String,
}

impl Message {
    /// Build a complete message.  The id and timestamp are assigned here,
    /// before the record ever reaches the shared history.
    pub fn new(sender: UserId, recipient: UserId, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            recipient,
            timestamp: Utc::now(),
            content: content.into(),
        }
    }

    /// Whether `user` is the sender or the recipient.
    pub fn involves(&self, user: &UserId) -> bool {
        self.sender == *user || self.recipient == *user
    }
}
