//! Conversational session core for the chat panel
//!
//! Framework-free: the view layer holds a [`ChatSession`] in a signal, spawns
//! the futures returned by [`ChatSession::submit`] and
//! [`ChatSession::admit_initial`], and feeds their output back through
//! [`ChatSession::deliver`].
//!
//! - `timeline` - append-only message store and id allocation
//! - `ingest` - at-most-once guard for the externally supplied initial message
//! - `reply` - scripted assistant reply and its cancellable timer
//! - `format` - timestamp text and bubble width hints
//! - `scroll` - scroll-to-newest requests on timeline growth
mod format;
mod ingest;
mod reply;
mod scroll;
mod timeline;

pub use format::{JUST_NOW, WidthBucket, format_timestamp};
pub use ingest::{Admission, InitialMessageGuard};
pub use reply::{
    DEFAULT_REPLY_DELAY, PendingReply, ReplyTasks, ScheduledReply, reply_content,
};
pub use scroll::{ScrollCoordinator, ScrollRequest};
pub use timeline::{IdAllocator, Timeline};

use crate::types::{Message, MessageOrigin};
use std::time::Duration;
use time::OffsetDateTime;

fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hydration {
    Hydrating,
    Hydrated,
}

/// One mounted chat view's conversation state.
#[derive(Debug)]
pub struct ChatSession {
    timeline: Timeline,
    guard: InitialMessageGuard,
    ids: IdAllocator,
    replies: ReplyTasks,
    hydration: Hydration,
    reply_delay: Duration,
}

impl ChatSession {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            timeline: Timeline::seeded(),
            guard: InitialMessageGuard::new(),
            ids: IdAllocator::new(),
            replies: ReplyTasks::new(),
            hydration: Hydration::Hydrating,
            reply_delay,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn messages(&self) -> &[Message] {
        self.timeline.as_slice()
    }

    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Admits user-typed input. Blank input changes nothing.
    pub fn submit(&mut self, input: &str) -> Option<ScheduledReply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.admit_user(trimmed.to_string(), MessageOrigin::Typed))
    }

    /// Offers the page-supplied initial message; re-offering an already
    /// forwarded value is a no-op.
    pub fn admit_initial(&mut self, value: Option<&str>) -> Option<ScheduledReply> {
        match self.guard.admit(value) {
            Admission::Admit(content) => Some(self.admit_user(content, MessageOrigin::Initial)),
            Admission::Skip => {
                tracing::trace!("initial message absent, blank or already forwarded");
                None
            }
        }
    }

    fn admit_user(&mut self, content: String, origin: MessageOrigin) -> ScheduledReply {
        let now = current_time();
        let id = self.ids.next(now);
        let pending = PendingReply {
            reply_to: id,
            content: reply_content(&content),
            delay: self.reply_delay,
        };
        tracing::info!(message_id = %id, ?origin, "user message admitted");
        self.timeline.append(Message::user(id, origin, content, now));
        tracing::debug!(reply_to = %id, delay = ?pending.delay, "reply scheduled");
        self.replies.schedule(pending)
    }

    /// Appends the assistant reply once its timer fired. Replies whose timer
    /// is no longer registered (cancelled, torn down, delivered) are dropped.
    pub fn deliver(&mut self, reply: PendingReply) -> Option<&Message> {
        if !self.replies.complete(reply.reply_to) {
            tracing::debug!(reply_to = %reply.reply_to, "dropping reply for inactive timer");
            return None;
        }
        let now = current_time();
        let id = self.ids.next(now);
        tracing::info!(message_id = %id, reply_to = %reply.reply_to, "assistant reply delivered");
        self.timeline.append(Message::reply(id, reply.content, now));
        self.timeline.last()
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    pub fn mark_hydrated(&mut self) {
        self.hydration = Hydration::Hydrated;
    }

    pub fn hydration(&self) -> Hydration {
        self.hydration
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydration == Hydration::Hydrated
    }

    pub fn display_time(&self, message: &Message) -> String {
        format_timestamp(message, self.is_hydrated())
    }

    /// Cancels every pending reply. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.replies.cancel_all();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}
