use crate::types::{Message, MessageId};

/// Ordered, append-only log of chat entries for one session.
///
/// Always starts with the bootstrap assistant message; entries are never
/// edited, reordered or removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    messages: Vec<Message>,
}

impl Timeline {
    pub fn seeded() -> Self {
        Self {
            messages: vec![Message::bootstrap()],
        }
    }

    /// Appends `message` as the new last entry and returns the full log.
    pub fn append(&mut self, message: Message) -> &[Message] {
        debug_assert!(
            !self.contains(message.id),
            "duplicate message id {}",
            message.id
        );
        self.messages.push(message);
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn contains(&self, id: MessageId) -> bool {
        self.messages.iter().any(|msg| msg.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Hands out message ids derived from admission time.
///
/// Two admissions in the same millisecond, or a clock step backwards, still
/// get distinct ids because every id is at least one past the previous one.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            last: crate::types::BOOTSTRAP_ID.0,
        }
    }

    pub fn next(&mut self, now: time::OffsetDateTime) -> MessageId {
        let millis = u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(0);
        self.last = millis.max(self.last + 1);
        MessageId(self.last)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
