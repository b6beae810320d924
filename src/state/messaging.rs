//! Messaging widget state: panel visibility, draft text, and the message log.
//!
//! DESIGN
//! ======
//! The record is plain data with named transitions so it can be driven and
//! asserted on without a renderer. The log only grows: messages are exposed
//! as a shared slice and `Message` has no mutators, so display order always
//! equals creation order.

#[cfg(test)]
#[path = "messaging_test.rs"]
mod messaging_test;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Unique message identifier produced by an [`IdSource`](crate::util::ids::IdSource).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Timestamp `delay` later, saturating at `i64::MAX`.
    #[must_use]
    pub fn after(self, delay: Duration) -> Self {
        let delay_ms = i64::try_from(delay.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(delay_ms))
    }
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier used by the message bubble.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single entry in the message log. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    timestamp: Timestamp,
}

impl Message {
    pub fn new(id: MessageId, text: impl Into<String>, sender: Sender, timestamp: Timestamp) -> Self {
        Self { id, text: text.into(), sender, timestamp }
    }

    #[must_use]
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

/// Panel visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Everything the widget remembers while mounted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingState {
    visibility: Visibility,
    draft: String,
    messages: Vec<Message>,
}

impl MessagingState {
    /// Closed panel, empty draft, log seeded with `welcome`.
    #[must_use]
    pub fn new(welcome: Message) -> Self {
        Self { visibility: Visibility::Closed, draft: String::new(), messages: vec![welcome] }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Flip the panel and return the new visibility.
    pub fn toggle_open(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Close the panel. Returns `true` if it was open.
    pub fn close_panel(&mut self) -> bool {
        let was_open = self.visibility.is_open();
        self.visibility = Visibility::Closed;
        was_open
    }

    /// Replace the draft verbatim.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Take the draft for sending, leaving it empty.
    ///
    /// Returns `None` and leaves the draft untouched when it is blank. The
    /// returned text is the raw draft; trimming is only used for the check.
    pub fn take_draft(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }

    pub(crate) fn append(&mut self, message: Message) {
        self.messages.push(message);
    }
}
