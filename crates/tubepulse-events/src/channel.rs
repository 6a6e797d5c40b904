//! Notification channel over Redis Streams.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, info, warn};

use crate::error::{EventsError, EventsResult};
use crate::event::ObjectCreatedEvent;

/// Channel configuration.
#[derive(Debug, Clone)]
pub struct EventsConfig {
    /// Redis URL
    pub redis_url: String,
    /// Stream name for notifications
    pub stream_name: String,
    /// Consumer group name
    pub consumer_group: String,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            stream_name: "tubepulse:objects".to_string(),
            consumer_group: "tubepulse:workers".to_string(),
        }
    }
}

impl EventsConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            stream_name: std::env::var("EVENTS_STREAM")
                .unwrap_or_else(|_| "tubepulse:objects".to_string()),
            consumer_group: std::env::var("EVENTS_CONSUMER_GROUP")
                .unwrap_or_else(|_| "tubepulse:workers".to_string()),
        }
    }
}

/// Publisher side of the notification channel.
///
/// A trait seam so the ingest handler can be exercised with a fake.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish a notification. Returns the stream message id.
    async fn publish(&self, event: &ObjectCreatedEvent) -> EventsResult<String>;
}

/// Notification channel client.
pub struct EventChannel {
    client: redis::Client,
    config: EventsConfig,
}

impl EventChannel {
    /// Create a new channel.
    pub fn new(config: EventsConfig) -> EventsResult<Self> {
        let client = redis::Client::open(config.redis_url.as_str())?;
        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> EventsResult<Self> {
        Self::new(EventsConfig::from_env())
    }

    /// Initialize the channel (create consumer group if not exists).
    pub async fn init(&self) -> EventsResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let result: Result<(), redis::RedisError> = redis::cmd("XGROUP")
            .arg("CREATE")
            .arg(&self.config.stream_name)
            .arg(&self.config.consumer_group)
            .arg("$")
            .arg("MKSTREAM")
            .query_async(&mut conn)
            .await;

        match result {
            Ok(_) => info!("Created consumer group: {}", self.config.consumer_group),
            Err(e) if e.to_string().contains("BUSYGROUP") => {
                debug!(
                    "Consumer group already exists: {}",
                    self.config.consumer_group
                );
            }
            Err(e) => return Err(EventsError::Redis(e)),
        }

        Ok(())
    }

    /// Consume notifications from the stream.
    /// Returns (message_id, event) pairs.
    pub async fn consume(
        &self,
        consumer_name: &str,
        block_ms: u64,
        count: usize,
    ) -> EventsResult<Vec<(String, ObjectCreatedEvent)>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let result: redis::streams::StreamReadReply = redis::cmd("XREADGROUP")
            .arg("GROUP")
            .arg(&self.config.consumer_group)
            .arg(consumer_name)
            .arg("COUNT")
            .arg(count)
            .arg("BLOCK")
            .arg(block_ms)
            .arg("STREAMS")
            .arg(&self.config.stream_name)
            .arg(">") // Only new messages
            .query_async(&mut conn)
            .await?;

        let mut events = Vec::new();

        for stream_key in result.keys {
            for entry in stream_key.ids {
                let message_id = entry.id.clone();

                if let Some(redis::Value::BulkString(payload)) = entry.map.get("event") {
                    let payload_str = String::from_utf8_lossy(payload);
                    match serde_json::from_str::<ObjectCreatedEvent>(&payload_str) {
                        Ok(event) => {
                            debug!("Consumed notification for {}", event.key);
                            events.push((message_id, event));
                        }
                        Err(e) => {
                            warn!("Failed to parse notification payload: {}", e);
                            // Ack the malformed message to prevent reprocessing
                            self.ack(&message_id).await.ok();
                        }
                    }
                }
            }
        }

        Ok(events)
    }

    /// Acknowledge a notification (terminal outcome, success or failure).
    pub async fn ack(&self, message_id: &str) -> EventsResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        redis::cmd("XACK")
            .arg(&self.config.stream_name)
            .arg(&self.config.consumer_group)
            .arg(message_id)
            .query_async::<()>(&mut conn)
            .await?;

        redis::cmd("XDEL")
            .arg(&self.config.stream_name)
            .arg(message_id)
            .query_async::<()>(&mut conn)
            .await?;

        debug!("Acknowledged notification: {}", message_id);
        Ok(())
    }

    /// Get stream length.
    pub async fn len(&self) -> EventsResult<u64> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let len: u64 = conn.xlen(&self.config.stream_name).await?;
        Ok(len)
    }
}

#[async_trait]
impl Notifier for EventChannel {
    async fn publish(&self, event: &ObjectCreatedEvent) -> EventsResult<String> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let payload = serde_json::to_string(event)?;

        let message_id: String = redis::cmd("XADD")
            .arg(&self.config.stream_name)
            .arg("*")
            .arg("event")
            .arg(&payload)
            .query_async(&mut conn)
            .await?;

        info!(
            "Published object-created notification for {} as {}",
            event.key, message_id
        );

        Ok(message_id)
    }
}
