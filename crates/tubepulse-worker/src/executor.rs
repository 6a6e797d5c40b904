//! Notification consumption loop.

use std::sync::Arc;
use std::time::Duration;

use metrics::{counter, gauge};
use tokio::sync::Semaphore;
use tracing::{debug, error, info};
use uuid::Uuid;

use tubepulse_events::{EventChannel, ObjectCreatedEvent};

use crate::config::WorkerConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::processor::{process_object_created, ProcessingContext};

/// Metric names as constants for consistency.
pub mod names {
    pub const EVENTS_PROCESSED_TOTAL: &str = "tubepulse_events_processed_total";
    pub const EVENTS_FAILED_TOTAL: &str = "tubepulse_events_failed_total";
    pub const STREAM_LENGTH: &str = "tubepulse_events_stream_length";
}

/// Executor that processes object-created notifications from the channel.
pub struct WorkerExecutor {
    config: WorkerConfig,
    channel: Arc<EventChannel>,
    semaphore: Arc<Semaphore>,
    shutdown: tokio::sync::watch::Sender<bool>,
    consumer_name: String,
}

impl WorkerExecutor {
    /// Create a new executor.
    pub fn new(config: WorkerConfig, channel: EventChannel) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));
        let (shutdown, _) = tokio::sync::watch::channel(false);
        let consumer_name = format!("worker-{}", Uuid::new_v4());

        Self {
            config,
            channel: Arc::new(channel),
            semaphore,
            shutdown,
            consumer_name,
        }
    }

    /// Start the executor.
    pub async fn run(&self) -> WorkerResult<()> {
        info!(
            "Starting executor '{}' with {} max concurrent analyses",
            self.consumer_name, self.config.max_concurrent_jobs
        );

        // Ensure the consumer group exists
        self.channel.init().await?;

        // Create processing context
        let ctx = Arc::new(ProcessingContext::new().await?);

        // Trip the shutdown flag on CTRL+C
        let shutdown_tx = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
            shutdown_tx.send(true).ok();
        });

        let mut shutdown_rx = self.shutdown.subscribe();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        info!("Shutdown signal received, stopping executor");
                        break;
                    }
                }
                result = self.consume_events(&ctx) => {
                    if let Err(e) = result {
                        error!("Error consuming notifications: {}", e);
                        // Back off on error
                        tokio::time::sleep(Duration::from_secs(5)).await;
                    }
                }
            }
        }

        // Wait for in-flight analyses to complete
        info!("Waiting for in-flight analyses to complete...");
        let _ = tokio::time::timeout(self.config.shutdown_timeout, self.wait_for_jobs()).await;

        info!("Executor stopped");
        Ok(())
    }

    /// Consume and process notifications from the channel.
    async fn consume_events(&self, ctx: &Arc<ProcessingContext>) -> WorkerResult<()> {
        let available = self.semaphore.available_permits();
        if available == 0 {
            // All slots busy, wait a bit
            tokio::time::sleep(Duration::from_millis(100)).await;
            return Ok(());
        }

        let events = self
            .channel
            .consume(
                &self.consumer_name,
                self.config.block_ms,
                available.min(self.config.batch_size),
            )
            .await?;

        // Backlog depth after this read, for dashboards
        if let Ok(len) = self.channel.len().await {
            gauge!(names::STREAM_LENGTH).set(len as f64);
        }

        if events.is_empty() {
            return Ok(());
        }

        debug!("Consumed {} notifications", events.len());

        for (message_id, event) in events {
            let ctx = Arc::clone(ctx);
            let channel = Arc::clone(&self.channel);
            let permit = self
                .semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|_| WorkerError::config_error("Semaphore closed"))?;

            tokio::spawn(async move {
                let _permit = permit;
                Self::execute_event(ctx, channel, message_id, event).await;
            });
        }

        Ok(())
    }

    /// Process one notification. Both outcomes are terminal: failed
    /// analyses are logged and acknowledged, not redelivered.
    async fn execute_event(
        ctx: Arc<ProcessingContext>,
        channel: Arc<EventChannel>,
        message_id: String,
        event: ObjectCreatedEvent,
    ) {
        match process_object_created(&ctx, &event).await {
            Ok(result) => {
                info!("Analysis completed for {}", result.video_id);
                counter!(names::EVENTS_PROCESSED_TOTAL).increment(1);
            }
            Err(e) => {
                error!("Analysis failed for {}: {}", event.key, e);
                counter!(names::EVENTS_FAILED_TOTAL).increment(1);
            }
        }

        if let Err(e) = channel.ack(&message_id).await {
            error!("Failed to ack notification {}: {}", message_id, e);
        }
    }

    /// Wait until every permit is back, meaning no analysis is in flight.
    async fn wait_for_jobs(&self) {
        loop {
            if self.semaphore.available_permits() == self.config.max_concurrent_jobs {
                return;
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    }
}
