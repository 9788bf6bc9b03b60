//! Frontend configuration structures and loaders.
//!
//! UI settings shared across frontend implementations.
use std::env;

#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `CLI_MESSAGE_LINES` - Messages shown under the history table (default: 5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(lines) = read_env::<usize>("CLI_MESSAGE_LINES") {
            config.messages.visible_lines = lines;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visible_lines: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visible_lines: 5,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
