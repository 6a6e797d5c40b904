//! DynamoDB item marshalling for analysis records.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use tubepulse_models::{AnalysisRecord, Category};

use crate::error::{StoreError, StoreResult};

/// Read a required string attribute.
pub fn attr_s(item: &HashMap<String, AttributeValue>, name: &str) -> StoreResult<String> {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::MissingAttribute(name.to_string()))
}

/// Read a required numeric attribute as f64.
pub fn attr_n(item: &HashMap<String, AttributeValue>, name: &str) -> StoreResult<f64> {
    let raw = item
        .get(name)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::MissingAttribute(name.to_string()))?;
    raw.parse()
        .map_err(|_| StoreError::InvalidAttribute(name.to_string(), raw.clone()))
}

/// Convert an analysis record into a DynamoDB item.
pub fn record_to_item(record: &AnalysisRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "video_id".to_string(),
            AttributeValue::S(record.video_id.clone()),
        ),
        (
            "input_text".to_string(),
            AttributeValue::S(record.input_text.clone()),
        ),
        (
            "summary".to_string(),
            AttributeValue::S(record.summary.clone()),
        ),
        (
            "category".to_string(),
            AttributeValue::S(record.category.as_str().to_string()),
        ),
        (
            "sentiment_score".to_string(),
            AttributeValue::N(record.sentiment_score.to_string()),
        ),
        (
            "video_suggestions".to_string(),
            AttributeValue::S(record.video_suggestions.clone()),
        ),
        (
            "final_result".to_string(),
            AttributeValue::S(record.final_result.clone()),
        ),
    ])
}

/// Convert a DynamoDB item back into an analysis record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> StoreResult<AnalysisRecord> {
    let category_raw = attr_s(item, "category")?;
    let category: Category = category_raw
        .parse()
        .map_err(|e: String| StoreError::InvalidAttribute("category".to_string(), e))?;

    Ok(AnalysisRecord {
        video_id: attr_s(item, "video_id")?,
        input_text: attr_s(item, "input_text")?,
        summary: attr_s(item, "summary")?,
        category,
        sentiment_score: attr_n(item, "sentiment_score")?,
        video_suggestions: attr_s(item, "video_suggestions")?,
        final_result: attr_s(item, "final_result")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AnalysisRecord {
        AnalysisRecord {
            video_id: "dQw4w9WgXcQ".to_string(),
            input_text: "great tutorial".to_string(),
            summary: "a great tutorial".to_string(),
            category: Category::Educational,
            sentiment_score: 0.8,
            video_suggestions: "- https://www.youtube.com/watch?v=abc".to_string(),
            final_result: "{}".to_string(),
        }
    }

    #[test]
    fn test_marshal_round_trip() {
        let record = sample_record();
        let item = record_to_item(&record);
        let back = item_to_record(&item).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_category_stored_lowercase() {
        let item = record_to_item(&sample_record());
        assert_eq!(item["category"].as_s().unwrap(), "educational");
    }

    #[test]
    fn test_missing_attribute() {
        let mut item = record_to_item(&sample_record());
        item.remove("summary");
        assert!(matches!(
            item_to_record(&item),
            Err(StoreError::MissingAttribute(name)) if name == "summary"
        ));
    }

    #[test]
    fn test_invalid_score() {
        let mut item = record_to_item(&sample_record());
        item.insert(
            "sentiment_score".to_string(),
            AttributeValue::N("not-a-number".to_string()),
        );
        assert!(matches!(
            item_to_record(&item),
            Err(StoreError::InvalidAttribute(_, _))
        ));
    }
}
