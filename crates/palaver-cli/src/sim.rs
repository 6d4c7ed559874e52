//! Scripted concurrent producers.
//!
//! Each script runs as its own tokio task, appending through a cloned
//! [`History`] handle.  The driver awaits every task before returning, so
//! by the time the interactive menu starts no producer is left running.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use palaver_store::{History, Message, StoreError, UserId};

/// One simulated user's bounded send plan.
pub struct Script {
    pub sender: UserId,
    pub recipients: Vec<UserId>,
    pub lines: Vec<String>,
}

impl Script {
    pub fn new(sender: &str, recipients: &[&str], lines: &[&str]) -> Self {
        Self {
            sender: UserId::new(sender),
            recipients: recipients.iter().map(|r| UserId::new(*r)).collect(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Planned sends in order: line `i` goes to `recipients[i % len]`.
    ///
    /// A script with no recipients plans no sends.
    pub fn sends(&self) -> impl Iterator<Item = (&UserId, &str)> {
        self.recipients
            .iter()
            .cycle()
            .zip(self.lines.iter().map(String::as_str))
    }
}

/// Run every script to completion and return the total number of sends.
///
/// Any store failure or task panic aborts the whole run.
pub async fn run(
    history: History,
    scripts: Vec<Script>,
    delay: Duration,
) -> anyhow::Result<usize> {
    info!(
        users = scripts.len(),
        delay_ms = delay.as_millis() as u64,
        "Starting simulation"
    );

    let mut workers: Vec<JoinHandle<Result<usize, StoreError>>> = Vec::new();
    for script in scripts {
        workers.push(tokio::spawn(run_script(history.clone(), script, delay)));
    }

    // Join barrier: the interactive phase must not start while any
    // producer is still appending.
    let mut total = 0;
    for worker in workers {
        total += worker.await??;
    }

    info!(total, "Simulation complete");
    Ok(total)
}

async fn run_script(
    history: History,
    script: Script,
    delay: Duration,
) -> Result<usize, StoreError> {
    let mut sent = 0;
    for (recipient, line) in script.sends() {
        let message = Message::new(script.sender.clone(), recipient.clone(), line);
        info!(
            id = %message.id,
            from = %message.sender,
            to = %message.recipient,
            content = %message.content,
            "Message sent"
        );
        history.append(message)?;
        sent += 1;
        tokio::time::sleep(delay).await;
    }
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_appends_every_scripted_send() {
        let history = History::new();
        let scripts = vec![
            Script::new("Alice", &["Bob"], &["a1", "a2"]),
            Script::new("Bob", &["Alice"], &["b1", "b2", "b3"]),
        ];

        let total = run(history.clone(), scripts, Duration::ZERO).await.unwrap();

        assert_eq!(total, 5);
        assert_eq!(history.len().unwrap(), 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_per_sender_order_survives_interleaving() {
        let history = History::new();
        let scripts: Vec<Script> = (0..4)
            .map(|s| {
                let sender = format!("user-{s}");
                let lines: Vec<String> = (0..10).map(|i| format!("{sender} #{i}")).collect();
                let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
                Script::new(&sender, &["sink"], &line_refs)
            })
            .collect();

        run(history.clone(), scripts, Duration::ZERO).await.unwrap();
        assert_eq!(history.len().unwrap(), 40);

        for s in 0..4 {
            let sender = UserId::new(format!("user-{s}"));
            let own = history.involving(&sender).unwrap();
            let contents: Vec<&str> = own.iter().map(|m| m.content.as_str()).collect();
            let expected: Vec<String> = (0..10).map(|i| format!("{sender} #{i}")).collect();
            assert_eq!(contents, expected);
        }
    }

    #[test]
    fn test_recipients_cycle_across_lines() {
        let script = Script::new("Dave", &["Alice", "Charlie"], &["1", "2", "3"]);
        let plan: Vec<(&str, &str)> = script
            .sends()
            .map(|(recipient, line)| (recipient.as_str(), line))
            .collect();

        assert_eq!(plan, [("Alice", "1"), ("Charlie", "2"), ("Alice", "3")]);
    }

    #[test]
    fn test_no_recipients_means_no_sends() {
        let script = Script::new("Ghost", &[], &["never delivered"]);
        assert_eq!(script.sends().count(), 0);
    }
}
