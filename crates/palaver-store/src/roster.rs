//! The set of known chat participants.
//!
//! The roster is an insertion-ordered in-memory list.  It is filled once at
//! startup and only read afterwards, so it carries no lock of its own; the
//! interactive phase owns it exclusively.

use crate::error::{Result, StoreError};
use crate::models::UserId;

/// In-memory registry of user ids, in registration order.
#[derive(Debug, Clone)]
pub struct Roster {
    users: Vec<UserId>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Add a user id.  Returns `false` if the id was already registered,
    /// in which case the roster is unchanged.
    pub fn register(&mut self, id: UserId) -> bool {
        if self.users.contains(&id) {
            return false;
        }
        self.users.push(id);
        true
    }

    /// Whether `id` has been registered.
    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains(id)
    }

    /// Error with [`StoreError::UnknownUser`] unless `id` is registered.
    pub fn ensure_known(&self, id: &UserId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(StoreError::UnknownUser(id.clone()))
        }
    }

    /// All registered ids, in registration order.
    pub fn ids(&self) -> &[UserId] {
        &self.users
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_contains() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());

        assert!(roster.register(UserId::new("Alice")));
        assert!(roster.contains(&UserId::new("Alice")));
        assert!(!roster.contains(&UserId::new("Bob")));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_register_duplicate_is_a_noop() {
        let mut roster = Roster::new();
        assert!(roster.register(UserId::new("Alice")));
        assert!(!roster.register(UserId::new("Alice")));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_ids_preserve_registration_order() {
        let mut roster = Roster::new();
        roster.register(UserId::new("Charlie"));
        roster.register(UserId::new("Alice"));
        roster.register(UserId::new("Bob"));

        let ids: Vec<&str> = roster.ids().iter().map(UserId::as_str).collect();
        assert_eq!(ids, ["Charlie", "Alice", "Bob"]);
    }

    #[test]
    fn test_ensure_known() {
        let mut roster = Roster::new();
        roster.register(UserId::new("Alice"));

        assert!(roster.ensure_known(&UserId::new("Alice")).is_ok());
        match roster.ensure_known(&UserId::new("Mallory")) {
            Err(StoreError::UnknownUser(id)) => assert_eq!(id.as_str(), "Mallory"),
            other => panic!("expected UnknownUser, got {other:?}"),
        }
    }
}
