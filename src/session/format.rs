use crate::types::Message;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub const JUST_NOW: &str = "Just now";

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// Display text for a message's creation time.
///
/// Returns an empty string until the view has hydrated so the prerendered
/// markup and the first client render agree. The bootstrap message always
/// reads "Just now".
pub fn format_timestamp(message: &Message, hydrated: bool) -> String {
    if !hydrated {
        return String::new();
    }
    if message.is_bootstrap() {
        return JUST_NOW.to_string();
    }
    format_time_of_day(message.created_at)
}

fn format_time_of_day(timestamp: OffsetDateTime) -> String {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).unwrap_or_default()
}

/// Display-width hint for a message bubble, by content length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidthBucket {
    Minimal,
    Small,
    Moderate,
    Large,
    Maximum,
}

impl WidthBucket {
    /// Length is counted in chars.
    pub fn classify(content: &str) -> Self {
        Self::for_len(content.chars().count())
    }

    pub fn for_len(len: usize) -> Self {
        match len {
            0..20 => WidthBucket::Minimal,
            20..60 => WidthBucket::Small,
            60..120 => WidthBucket::Moderate,
            120..200 => WidthBucket::Large,
            _ => WidthBucket::Maximum,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            WidthBucket::Minimal => "bubble-w-minimal",
            WidthBucket::Small => "bubble-w-small",
            WidthBucket::Moderate => "bubble-w-moderate",
            WidthBucket::Large => "bubble-w-large",
            WidthBucket::Maximum => "bubble-w-maximum",
        }
    }
}
