use crate::types::MessageId;
use futures::FutureExt;
use futures::future::{AbortHandle, Abortable, BoxFuture};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Scripted assistant answer for a user message.
pub fn reply_content(trigger: &str) -> String {
    format!(
        "I'll analyze the {} data for you. Let me pull up the relevant oceanographic measurements and display them in the visualization panel.",
        trigger.to_lowercase()
    )
}

/// A reply waiting for its delay to elapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub reply_to: MessageId,
    pub content: String,
    pub delay: Duration,
}

/// Timer half of a scheduled reply, handed to whatever executor drives it.
///
/// The session keeps the matching abort handle, so tearing the session down
/// resolves `wait` to `None`.
pub struct ScheduledReply {
    reply: PendingReply,
    timer: Abortable<BoxFuture<'static, ()>>,
}

impl ScheduledReply {
    pub fn pending(&self) -> &PendingReply {
        &self.reply
    }

    /// Sleeps for the reply delay. `None` if the reply was cancelled.
    pub async fn wait(self) -> Option<PendingReply> {
        let ScheduledReply { reply, timer } = self;
        match timer.await {
            Ok(()) => Some(reply),
            Err(_) => {
                tracing::debug!(reply_to = %reply.reply_to, "reply cancelled before delivery");
                None
            }
        }
    }
}

impl std::fmt::Debug for ScheduledReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledReply")
            .field("reply", &self.reply)
            .finish_non_exhaustive()
    }
}

/// Outstanding reply timers owned by one session, keyed by triggering message.
#[derive(Debug, Default)]
pub struct ReplyTasks {
    handles: HashMap<MessageId, AbortHandle>,
}

impl ReplyTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, reply: PendingReply) -> ScheduledReply {
        let (handle, registration) = AbortHandle::new_pair();
        // Created lazily so the timer binds to whichever runtime polls it.
        let delay = reply.delay;
        let timer = async move { tokio::time::sleep(delay).await }.boxed();
        self.handles.insert(reply.reply_to, handle);
        ScheduledReply {
            reply,
            timer: Abortable::new(timer, registration),
        }
    }

    /// Removes the timer for `reply_to`; `false` if it was not outstanding.
    pub fn complete(&mut self, reply_to: MessageId) -> bool {
        self.handles.remove(&reply_to).is_some()
    }

    pub fn cancel_all(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        tracing::debug!(count = self.handles.len(), "cancelling pending replies");
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for ReplyTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
