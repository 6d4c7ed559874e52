//! The shared message history.
//!
//! [`History`] is a cheap-to-clone handle around a single mutex-protected,
//! append-only sequence.  Producers and readers go through the same lock:
//! an append holds it for the entire push and a scan holds it for one full
//! linear pass, so readers only ever observe fully constructed messages.
//!
//! A scan result is a point-in-time snapshot: it reflects exactly the
//! history state at lock acquisition and is never retroactively affected
//! by later appends.  Two consecutive scans may disagree while writers are
//! active; a single scan is always internally consistent.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::models::{Message, UserId};

/// Shared, lock-protected, append-only message log.
///
/// Cloning is shallow: every clone refers to the same underlying sequence,
/// which is how the handle is injected into concurrent producers.
#[derive(Clone)]
pub struct History {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl History {
    /// Create a new, empty history.
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append one message to the end of the log.
    ///
    /// Insertion order is arrival order under the lock; there is no
    /// deduplication and no capacity limit.
    pub fn append(&self, message: Message) -> Result<()> {
        let mut messages = self.messages.lock().map_err(|_| StoreError::LockPoisoned)?;
        messages.push(message);
        debug!(total = messages.len(), "appended message to history");
        Ok(())
    }

    /// One full linear pass under the lock; returns clones of the matching
    /// messages in insertion order.
    pub fn scan<P>(&self, predicate: P) -> Result<Vec<Message>>
    where
        P: Fn(&Message) -> bool,
    {
        let messages = self.messages.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(messages.iter().filter(|m| predicate(m)).cloned().collect())
    }

    /// Every message, in insertion order.
    pub fn all(&self) -> Result<Vec<Message>> {
        self.scan(|_| true)
    }

    /// Messages where `user` is the sender or the recipient.
    pub fn involving(&self, user: &UserId) -> Result<Vec<Message>> {
        self.scan(|m| m.involves(user))
    }

    /// Messages whose content contains `keyword`, case-insensitively.
    ///
    /// The empty keyword matches every message.
    pub fn containing(&self, keyword: &str) -> Result<Vec<Message>> {
        let needle = keyword.to_lowercase();
        self.scan(move |m| m.content.to_lowercase().contains(&needle))
    }

    /// Number of messages currently in the log.
    pub fn len(&self) -> Result<usize> {
        let messages = self.messages.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(messages.len())
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
