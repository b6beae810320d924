//! Message id generation.
//!
//! Ids come from an injected source rather than the wall clock, so a user
//! message and a bot reply created in the same millisecond never collide and
//! tests get predictable ids.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use crate::state::messaging::MessageId;

/// Produces unique message ids for one widget instance.
pub trait IdSource {
    fn next_id(&mut self) -> MessageId;
}

/// Monotonic per-widget counter: `msg-1`, `msg-2`, ...
///
/// Deterministic, so the server-rendered and hydrated widget agree on the
/// welcome message id.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> MessageId {
        self.issued += 1;
        MessageId::new(format!("msg-{}", self.issued))
    }
}

/// Random UUID v4 ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> MessageId {
        MessageId::new(uuid::Uuid::new_v4().to_string())
    }
}
