//! # palaver-cli
//!
//! Single-process chat simulation with an interactive console.
//!
//! This binary provides:
//! - **A scripted simulation** where five demo users concurrently append
//!   their conversations to one shared, mutex-guarded history
//! - **An interactive menu** to send further messages and query the
//!   history (full listing, by participant, by keyword)
//!
//! Everything lives in memory; nothing touches the network or disk.
//! Diagnostics go to stderr so the menu on stdout stays readable.

mod config;
mod demo;
mod menu;
mod render;
mod sim;

use tracing::info;
use tracing_subscriber::EnvFilter;

use palaver_store::History;

use crate::config::AppConfig;
use crate::menu::Menu;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,palaver_cli=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting palaver v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = AppConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Initialize shared state
    // -----------------------------------------------------------------------
    let history = History::new();
    let roster = demo::demo_roster();

    // -----------------------------------------------------------------------
    // 4. Run the scripted simulation to completion (join barrier inside)
    // -----------------------------------------------------------------------
    if config.skip_sim {
        info!("SKIP_SIM set, starting with an empty history");
    } else {
        sim::run(history.clone(), demo::demo_scripts(), config.send_delay).await?;
    }

    // -----------------------------------------------------------------------
    // 5. Run the interactive menu (blocks until exit)
    // -----------------------------------------------------------------------
    let menu = Menu::new(history, roster);
    tokio::select! {
        result = menu.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
