//! Widget copy, labels, and reply timing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Message Bigwise";
pub const DEFAULT_SUBTITLE: &str = "Chat with us directly";
pub const DEFAULT_WELCOME_TEXT: &str = "Hi there! Welcome to Bigwise. How can we help you today?";
pub const DEFAULT_REPLY_TEXT: &str = "Thanks for your message! Our team will get back to you shortly.";
pub const DEFAULT_PLACEHOLDER: &str = "Type message...";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 500;

/// Browser timers take a `u32` millisecond delay.
const MAX_REPLY_DELAY_MS: u64 = u32::MAX as u64;

/// Errors produced by [`WidgetConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A scripted message would render as an empty bubble.
    #[error("{field} must not be blank")]
    EmptyText { field: &'static str },

    /// The reply delay does not fit a browser timer.
    #[error("reply delay {millis}ms exceeds {max}ms", max = MAX_REPLY_DELAY_MS)]
    DelayOutOfRange { millis: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub title: String,
    pub subtitle: String,
    pub welcome_text: String,
    pub reply_text: String,
    pub placeholder: String,
    pub reply_delay_ms: u64,
    /// Cancel replies still in flight when the panel is closed. Off by
    /// default: closing only hides the panel.
    pub close_cancels_replies: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            subtitle: DEFAULT_SUBTITLE.to_owned(),
            welcome_text: DEFAULT_WELCOME_TEXT.to_owned(),
            reply_text: DEFAULT_REPLY_TEXT.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            close_cancels_replies: false,
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Check the config can drive a widget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.welcome_text.trim().is_empty() {
            return Err(ConfigError::EmptyText { field: "welcome_text" });
        }
        if self.reply_text.trim().is_empty() {
            return Err(ConfigError::EmptyText { field: "reply_text" });
        }
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(ConfigError::DelayOutOfRange { millis: self.reply_delay_ms });
        }
        Ok(())
    }

    /// `self` if valid, otherwise the defaults (logging why).
    #[must_use]
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("invalid messaging widget config, using defaults: {e}");
                Self::default()
            }
        }
    }
}
