//! Analysis-result store.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use tubepulse_models::{AnalysisRecord, Category};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::marshal::{attr_s, item_to_record, record_to_item};

/// Result-store operations used by the pipeline.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Look up the analysis record for a video id. Absent records are
    /// `Ok(None)`; any other fault is an error.
    async fn get(&self, video_id: &str) -> StoreResult<Option<AnalysisRecord>>;

    /// Write the full analysis record, replacing any existing one
    /// (last-write-wins for the accepted same-video race).
    async fn put(&self, record: &AnalysisRecord) -> StoreResult<()>;

    /// Scan for links to videos in the same category with sentiment score
    /// strictly above the threshold. Order is store-defined.
    async fn top_videos(&self, category: Category, min_sentiment: f64)
        -> StoreResult<Vec<String>>;
}

/// DynamoDB-backed analysis store.
#[derive(Clone)]
pub struct DynamoAnalysisStore {
    client: Client,
    table: String,
}

impl DynamoAnalysisStore {
    /// Create a new store from configuration, using the default AWS
    /// credential provider chain.
    pub async fn new(config: &StoreConfig) -> StoreResult<Self> {
        Ok(Self {
            client: dynamo_client(config).await,
            table: config.results_table.clone(),
        })
    }
}

/// Build a DynamoDB client for the given store config.
pub(crate) async fn dynamo_client(config: &StoreConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let Some(ref endpoint) = config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    Client::new(&loader.load().await)
}

#[async_trait]
impl AnalysisStore for DynamoAnalysisStore {
    async fn get(&self, video_id: &str) -> StoreResult<Option<AnalysisRecord>> {
        debug!("Looking up analysis for {}", video_id);

        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("video_id", AttributeValue::S(video_id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::request_failed(e.to_string()))?;

        match output.item {
            Some(ref item) => Ok(Some(item_to_record(item)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, record: &AnalysisRecord) -> StoreResult<()> {
        debug!("Writing analysis for {}", record.video_id);

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| StoreError::request_failed(e.to_string()))?;

        Ok(())
    }

    async fn top_videos(
        &self,
        category: Category,
        min_sentiment: f64,
    ) -> StoreResult<Vec<String>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table)
            .filter_expression("category = :category AND sentiment_score > :min_sentiment_score")
            .expression_attribute_values(
                ":category",
                AttributeValue::S(category.as_str().to_string()),
            )
            .expression_attribute_values(
                ":min_sentiment_score",
                AttributeValue::N(min_sentiment.to_string()),
            )
            .send()
            .await
            .map_err(|e| StoreError::request_failed(e.to_string()))?;

        output
            .items
            .unwrap_or_default()
            .iter()
            .map(|item| {
                let video_id = attr_s(item, "video_id")?;
                Ok(format!("https://www.youtube.com/watch?v={}", video_id))
            })
            .collect()
    }
}
