//! Runtime configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the binary can run with zero
//! configuration.

use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pause between two consecutive sends of the same scripted user.
    /// Env: `SEND_DELAY_MS` (milliseconds)
    /// Default: `100`
    pub send_delay: Duration,

    /// Skip the scripted simulation and go straight to the menu.
    /// Env: `SKIP_SIM` (true/false)
    /// Default: `false`
    pub skip_sim: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(100),
            skip_sim: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("SEND_DELAY_MS") {
            match parse_millis(&raw) {
                Ok(delay) => config.send_delay = delay,
                Err(e) => {
                    tracing::warn!(
                        value = %raw,
                        error = %e,
                        "Invalid SEND_DELAY_MS, using default"
                    );
                }
            }
        }

        if let Ok(val) = std::env::var("SKIP_SIM") {
            config.skip_sim = val == "true" || val == "1";
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

/// Parse a non-negative integer number of milliseconds.
fn parse_millis(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let ms = raw
        .parse::<u64>()
        .map_err(|e| format!("not a millisecond count: {e}"))?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.send_delay, Duration::from_millis(100));
        assert!(!config.skip_sim);
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("250").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_millis(" 0 ").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_millis_rejects_garbage() {
        assert!(parse_millis("fast").is_err());
        assert!(parse_millis("-5").is_err());
        assert!(parse_millis("").is_err());
    }
}
