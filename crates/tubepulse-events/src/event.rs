//! Notification payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification that an object was written to the handoff bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectCreatedEvent {
    /// Bucket the object was written to
    pub bucket: String,
    /// Object key (`<video_id>.json`)
    pub key: String,
    /// When the notification was published
    pub created_at: DateTime<Utc>,
}

impl ObjectCreatedEvent {
    /// Create a new notification.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_round_trip() {
        let event = ObjectCreatedEvent::new("handoff", "dQw4w9WgXcQ.json");
        let json = serde_json::to_string(&event).unwrap();
        let back: ObjectCreatedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
