use super::Timeline;
use crate::types::{MessageId, dom_id};

/// Smooth scroll to the newest bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: MessageId,
}

impl ScrollRequest {
    /// Script that brings the target bubble into view. Best effort: a missing
    /// element is ignored.
    pub fn to_script(&self) -> String {
        format!(
            "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'end' }});",
            dom_id(self.target)
        )
    }
}

/// Turns timeline growth into scroll-to-newest requests.
#[derive(Clone, Debug, Default)]
pub struct ScrollCoordinator {
    observed_len: usize,
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, timeline: &Timeline) -> Option<ScrollRequest> {
        let len = timeline.len();
        if len == self.observed_len {
            return None;
        }
        self.observed_len = len;
        timeline
            .last()
            .map(|newest| ScrollRequest { target: newest.id })
    }
}
