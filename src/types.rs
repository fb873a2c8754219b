use serde::{Deserialize, Serialize};
use std::fmt;
use time::{OffsetDateTime, macros::datetime};

/// Creation time shared by every session's bootstrap message.
pub const BOOTSTRAP_CREATED_AT: OffsetDateTime = datetime!(2024-01-01 0:00 UTC);

pub const BOOTSTRAP_ID: MessageId = MessageId(1);

const BOOTSTRAP_GREETING: &str = "Hello! I'm your AI oceanographic assistant. I can help you explore ocean data, analyze float measurements, and visualize marine conditions. What would you like to discover today?";

const BOOTSTRAP_SUGGESTIONS: &[&str] = &[
    "Show salinity in Arabian Sea",
    "Temperature profiles near equator",
    "Recent float trajectories",
    "Compare seasonal patterns",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Where a message entered the timeline from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    Bootstrap,
    Typed,
    Initial,
    Reply,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub origin: MessageOrigin,
    pub content: String,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Message {
    pub fn bootstrap() -> Self {
        Self {
            id: BOOTSTRAP_ID,
            role: Role::Assistant,
            origin: MessageOrigin::Bootstrap,
            content: BOOTSTRAP_GREETING.to_string(),
            created_at: BOOTSTRAP_CREATED_AT,
            suggestions: BOOTSTRAP_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn user(
        id: MessageId,
        origin: MessageOrigin,
        content: String,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            role: Role::User,
            origin,
            content,
            created_at,
            suggestions: Vec::new(),
        }
    }

    pub fn reply(id: MessageId, content: String, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            role: Role::Assistant,
            origin: MessageOrigin::Reply,
            content,
            created_at,
            suggestions: Vec::new(),
        }
    }

    pub fn is_bootstrap(&self) -> bool {
        self.created_at == BOOTSTRAP_CREATED_AT
    }

    /// DOM id of the rendered bubble, used as the scroll target.
    pub fn dom_id(&self) -> String {
        dom_id(self.id)
    }
}

pub fn dom_id(id: MessageId) -> String {
    format!("message-{id}")
}
