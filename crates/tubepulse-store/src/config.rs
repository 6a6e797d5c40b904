//! Store configuration.

/// Table names and connection settings for the DynamoDB stores.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Analysis-result table, keyed by `video_id`
    pub results_table: String,
    /// Request-status table, keyed by `RequestID`
    pub status_table: String,
    /// Region
    pub region: String,
    /// Optional endpoint override (local testing)
    pub endpoint_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            results_table: "tubepulse-analyses".to_string(),
            status_table: "tubepulse-requests".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            results_table: std::env::var("RESULTS_TABLE")
                .unwrap_or_else(|_| "tubepulse-analyses".to_string()),
            status_table: std::env::var("STATUS_TABLE")
                .unwrap_or_else(|_| "tubepulse-requests".to_string()),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: std::env::var("DYNAMODB_ENDPOINT_URL").ok(),
        }
    }
}
