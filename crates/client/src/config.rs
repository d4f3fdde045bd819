//! Client configuration loaded from the process environment.
use std::env;

/// Terminal client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Session identifier used to group log files (default: auto-generated).
    pub session_id: Option<String>,
    /// Capacity of the on-screen message log.
    pub message_capacity: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            message_capacity: 64,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HOARD_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.max(1);
        }

        if let Ok(session_id) = env::var("HOARD_SESSION_ID")
            && !session_id.is_empty()
        {
            config.session_id = Some(session_id);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
