//! Widget controller: the operations behind every user action.
//!
//! DESIGN
//! ======
//! `WidgetController` owns the [`MessagingState`] plus the capabilities it
//! needs (clock, id source, reply queue). The Leptos layer holds one
//! controller per mounted widget in a signal and calls these methods from
//! event handlers; tests call them directly with a [`ManualClock`].
//!
//! Each successful send schedules one canned bot reply. Replies already in
//! flight are never replaced, so rapid sends each get their own reply.
//! Closing the panel leaves them pending unless the config opts in to
//! cancelling; [`WidgetController::teardown`] always cancels.
//!
//! [`ManualClock`]: crate::util::clock::ManualClock

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::config::WidgetConfig;
use crate::state::messaging::{Message, MessageId, MessagingState, Sender, Timestamp, Visibility};
use crate::util::clock::Clock;
use crate::util::deferred::{DeferredQueue, TaskHandle};
use crate::util::ids::IdSource;

/// A bot reply waiting for its timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    /// The user message this reply answers.
    pub in_reply_to: MessageId,
}

/// Result of [`WidgetController::send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Draft was blank; nothing changed.
    Ignored,
    /// The draft was appended and a reply was scheduled.
    Sent { message: MessageId, reply: TaskHandle, due: Timestamp },
}

#[derive(Debug)]
pub struct WidgetController<C, I> {
    config: WidgetConfig,
    clock: C,
    ids: I,
    state: MessagingState,
    replies: DeferredQueue<PendingReply>,
}

impl<C: Clock, I: IdSource> WidgetController<C, I> {
    /// Mount a widget: closed panel, empty draft, one welcome message.
    pub fn new(config: WidgetConfig, clock: C, mut ids: I) -> Self {
        let welcome = Message::new(ids.next_id(), config.welcome_text.clone(), Sender::Bot, clock.now());
        Self { config, clock, ids, state: MessagingState::new(welcome), replies: DeferredQueue::new() }
    }

    #[must_use]
    pub fn state(&self) -> &MessagingState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn toggle_open(&mut self) -> Visibility {
        self.state.toggle_open()
    }

    pub fn close_panel(&mut self) {
        if self.state.close_panel() && self.config.close_cancels_replies {
            let cancelled = self.replies.cancel_all();
            if cancelled > 0 {
                log::debug!("panel closed, cancelled {cancelled} pending replies");
            }
        }
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.state.update_draft(text);
    }

    /// Append the draft as a user message and schedule the bot reply.
    pub fn send(&mut self) -> SendOutcome {
        let Some(text) = self.state.take_draft() else {
            return SendOutcome::Ignored;
        };

        let now = self.clock.now();
        let id = self.ids.next_id();
        self.state.append(Message::new(id.clone(), text, Sender::User, now));

        let due = now.after(self.config.reply_delay());
        let reply = self.replies.schedule(due, PendingReply { in_reply_to: id.clone() });
        log::debug!("message {id} sent, reply due at {}", due.as_millis());

        SendOutcome::Sent { message: id, reply, due }
    }

    /// Deliver the reply behind `handle` now, if it is still pending.
    ///
    /// Returns `false` for handles that were cancelled or already fired.
    pub fn fire(&mut self, handle: TaskHandle) -> bool {
        match self.replies.take(handle) {
            Some(pending) => {
                self.deliver(&pending);
                true
            }
            None => false,
        }
    }

    /// Deliver every reply due at or before the clock's current time.
    pub fn run_due(&mut self) -> usize {
        let due = self.replies.take_due(self.clock.now());
        for (_, pending) in &due {
            self.deliver(pending);
        }
        due.len()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Timestamp> {
        self.replies.next_due()
    }

    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    /// Cancel everything still scheduled. Called when the widget unmounts.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.replies.cancel_all();
        if cancelled > 0 {
            log::debug!("widget torn down with {cancelled} pending replies");
        }
        cancelled
    }

    fn deliver(&mut self, pending: &PendingReply) {
        let id = self.ids.next_id();
        log::debug!("bot reply {id} to {}", pending.in_reply_to);
        let reply = Message::new(id, self.config.reply_text.clone(), Sender::Bot, self.clock.now());
        self.state.append(reply);
    }
}
