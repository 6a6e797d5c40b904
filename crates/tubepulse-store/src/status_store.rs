//! Request-status store.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use tubepulse_models::RequestStatus;

use crate::analysis_store::dynamo_client;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Status-store operations. The status record is created upstream; the
/// pipeline only ever transitions it to Completed, exactly once.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Mark the request Completed and attach the final result payload.
    async fn mark_completed(&self, request_id: &str, final_result: &str) -> StoreResult<()>;
}

/// DynamoDB-backed status store.
#[derive(Clone)]
pub struct DynamoStatusStore {
    client: Client,
    table: String,
}

impl DynamoStatusStore {
    /// Create a new store from configuration, using the default AWS
    /// credential provider chain.
    pub async fn new(config: &StoreConfig) -> StoreResult<Self> {
        Ok(Self {
            client: dynamo_client(config).await,
            table: config.status_table.clone(),
        })
    }
}

#[async_trait]
impl StatusStore for DynamoStatusStore {
    async fn mark_completed(&self, request_id: &str, final_result: &str) -> StoreResult<()> {
        debug!("Marking request {} completed", request_id);

        self.client
            .update_item()
            .table_name(&self.table)
            .key("RequestID", AttributeValue::S(request_id.to_string()))
            .update_expression("SET RequestStatus = :completed, FinalResult = :result")
            .expression_attribute_values(
                ":completed",
                AttributeValue::S(RequestStatus::Completed.as_str().to_string()),
            )
            .expression_attribute_values(":result", AttributeValue::S(final_result.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::request_failed(e.to_string()))?;

        Ok(())
    }
}
