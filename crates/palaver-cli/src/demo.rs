//! Built-in demo fixture: five users and their scripted conversations.

use palaver_store::{Roster, UserId};

use crate::sim::Script;

const DEMO_USERS: [&str; 5] = ["Alice", "Bob", "Charlie", "Dave", "Eve"];

/// Roster holding the five demo users, in fixture order.
pub fn demo_roster() -> Roster {
    let mut roster = Roster::new();
    for id in DEMO_USERS {
        roster.register(UserId::new(id));
    }
    roster
}

/// One send plan per demo user.  Each user sends three lines; recipients
/// repeat cyclically when a plan lists fewer of them than lines.
pub fn demo_scripts() -> Vec<Script> {
    vec![
        Script::new(
            "Alice",
            &["Bob"],
            &["Hello Bob!", "How are you?", "Let's catch up soon."],
        ),
        Script::new(
            "Bob",
            &["Alice"],
            &["Hi Alice!", "I'm good, thanks.", "Sure, sounds great."],
        ),
        Script::new(
            "Charlie",
            &["Alice", "Bob", "Alice"],
            &["Hey Alice and Bob!", "What are you guys up to?", "Join me for a game?"],
        ),
        Script::new(
            "Dave",
            &["Alice", "Charlie", "Eve"],
            &["Dave here!", "Anyone up for coffee?", "Ping me later."],
        ),
        Script::new(
            "Eve",
            &["Dave", "Bob", "Charlie"],
            &["Eve has entered the chat.", "Hi all!", "Nice to meet you!"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_roster_has_five_users() {
        let roster = demo_roster();
        assert_eq!(roster.len(), 5);
        assert!(roster.contains(&UserId::new("Alice")));
        assert!(roster.contains(&UserId::new("Eve")));
    }

    #[test]
    fn test_every_script_sender_is_registered() {
        let roster = demo_roster();
        for script in demo_scripts() {
            assert!(roster.contains(&script.sender), "unknown sender in fixture");
            for recipient in &script.recipients {
                assert!(roster.contains(recipient), "unknown recipient in fixture");
            }
        }
    }

    #[test]
    fn test_every_script_sends_three_lines() {
        for script in demo_scripts() {
            assert_eq!(script.lines.len(), 3);
            assert!(!script.recipients.is_empty());
        }
    }
}
