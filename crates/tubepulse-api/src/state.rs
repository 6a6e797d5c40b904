//! Application state.

use std::sync::Arc;

use tubepulse_events::{EventChannel, Notifier};
use tubepulse_storage::{ObjectStore, S3Client};
use tubepulse_store::{AnalysisStore, DynamoAnalysisStore, DynamoStatusStore, StatusStore, StoreConfig};

use crate::config::ApiConfig;

/// Shared application state.
///
/// The backing services are held behind trait objects so handlers can be
/// exercised with in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub storage: Arc<dyn ObjectStore>,
    pub analyses: Arc<dyn AnalysisStore>,
    pub statuses: Arc<dyn StatusStore>,
    pub events: Arc<dyn Notifier>,
}

impl AppState {
    /// Create new application state from the environment.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let storage = S3Client::from_env().await?;

        let store_config = StoreConfig::from_env();
        let analyses = DynamoAnalysisStore::new(&store_config).await?;
        let statuses = DynamoStatusStore::new(&store_config).await?;

        let events = EventChannel::from_env()?;
        events.init().await?;

        Ok(Self {
            config,
            storage: Arc::new(storage),
            analyses: Arc::new(analyses),
            statuses: Arc::new(statuses),
            events: Arc::new(events),
        })
    }
}
