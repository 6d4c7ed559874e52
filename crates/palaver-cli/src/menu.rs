//! Interactive console menu.
//!
//! Runs strictly after the simulation has been joined, so the menu is the
//! only writer left.  It still goes through the same shared [`History`]
//! handle the producers used; queries see everything they appended.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

use palaver_store::{History, Message, Roster, UserId};

use crate::render;

const MENU: &str = "\
--- Chat Menu ---
1. Send Message
2. Display All Messages
3. Search by User ID
4. Search by Keyword
5. Display All User IDs
6. Exit";

/// The menu loop and the state it drives.
pub struct Menu {
    history: History,
    roster: Roster,
    input: Lines<BufReader<Stdin>>,
    closed: bool,
}

impl Menu {
    pub fn new(history: History, roster: Roster) -> Self {
        Self {
            history,
            roster,
            input: BufReader::new(tokio::io::stdin()).lines(),
            closed: false,
        }
    }

    /// Run the menu until the user picks "Exit" or stdin closes.
    pub async fn run(mut self) -> anyhow::Result<()> {
        info!("Entering interactive menu");

        while !self.closed {
            println!("\n{MENU}");
            let Some(line) = self.prompt("Enter your choice: ").await? else {
                break;
            };
            let choice = match line.trim().parse::<i32>() {
                Ok(choice) => choice,
                Err(_) => {
                    println!("Invalid input. Please enter a number.");
                    continue;
                }
            };

            match choice {
                1 => self.send_message().await?,
                2 => self.show_history()?,
                3 => self.search_by_user().await?,
                4 => self.search_by_keyword().await?,
                5 => self.list_users(),
                6 => {
                    println!("Exiting chat...");
                    break;
                }
                _ => println!("Invalid choice. Try again."),
            }
        }

        info!("Menu closed");
        Ok(())
    }

    /// Print `text` without a trailing newline and read one input line.
    ///
    /// Returns `None` once stdin is closed; the loop then winds down
    /// without reprinting the menu.
    async fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        print!("{text}");
        std::io::stdout().flush()?;

        let line = self.input.next_line().await?;
        if line.is_none() {
            self.closed = true;
        }
        Ok(line)
    }

    /// Choice 1.  Ids are trimmed; message content is taken verbatim.
    /// Only the sender is validated against the roster.
    async fn send_message(&mut self) -> anyhow::Result<()> {
        let Some(sender) = self.prompt("Enter Sender ID: ").await? else {
            return Ok(());
        };
        let Some(recipient) = self.prompt("Enter Recipient ID: ").await? else {
            return Ok(());
        };
        let Some(content) = self.prompt("Enter Message: ").await? else {
            return Ok(());
        };

        let sender = UserId::new(sender.trim());
        let recipient = UserId::new(recipient.trim());
        if let Err(err) = self.roster.ensure_known(&sender) {
            println!("Cannot send: {err}");
            return Ok(());
        }

        let message = Message::new(sender, recipient, content);
        let echo = render::format_message(&message);
        info!(
            id = %message.id,
            from = %message.sender,
            to = %message.recipient,
            "Message sent"
        );
        self.history.append(message)?;
        println!("{echo}");
        Ok(())
    }

    /// Choice 2.
    fn show_history(&self) -> anyhow::Result<()> {
        let messages = self.history.all()?;
        println!("\n{}", render::history_block("Message History", &messages));
        Ok(())
    }

    /// Choice 3.  Exact id match against sender or recipient.
    async fn search_by_user(&mut self) -> anyhow::Result<()> {
        let Some(raw) = self.prompt("Enter User ID to search: ").await? else {
            return Ok(());
        };
        let user = UserId::new(raw.trim());

        let messages = self.history.involving(&user)?;
        let title = format!("Messages for User: {user}");
        println!("\n{}", render::history_block(&title, &messages));
        Ok(())
    }

    /// Choice 4.  The keyword is matched case-insensitively and is not
    /// trimmed: leading or trailing spaces are part of the search.
    async fn search_by_keyword(&mut self) -> anyhow::Result<()> {
        let Some(keyword) = self.prompt("Enter keyword to search: ").await? else {
            return Ok(());
        };

        let messages = self.history.containing(&keyword)?;
        let title = format!("Messages containing keyword: \"{keyword}\"");
        println!("\n{}", render::history_block(&title, &messages));
        Ok(())
    }

    /// Choice 5.
    fn list_users(&self) {
        println!("\n{}", render::roster_block(self.roster.ids()));
    }
}
