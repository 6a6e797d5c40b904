//! Analysis pipeline for a single handoff record.

use std::sync::Arc;

use tracing::{info, warn};

use tubepulse_analysis::{
    chunk_text, feedback_message, render_suggestions, score_percentage, KeywordTable,
    SentimentLexicon, MAX_CHUNK_CHARS, MIN_SUGGESTION_SCORE,
};
use tubepulse_events::ObjectCreatedEvent;
use tubepulse_inference::{Summarizer, SummarizerClient};
use tubepulse_models::{AnalysisRecord, FinalResult, HandoffRecord};
use tubepulse_storage::{ObjectStore, S3Client};
use tubepulse_store::{AnalysisStore, DynamoAnalysisStore, DynamoStatusStore, StatusStore, StoreConfig};

use crate::error::{WorkerError, WorkerResult};

/// Shared services and analysis tables for the worker.
pub struct ProcessingContext {
    pub storage: Arc<dyn ObjectStore>,
    pub analyses: Arc<dyn AnalysisStore>,
    pub statuses: Arc<dyn StatusStore>,
    pub summarizer: Arc<dyn Summarizer>,
    pub keywords: KeywordTable,
    pub lexicon: SentimentLexicon,
}

impl ProcessingContext {
    /// Create a context from the environment.
    pub async fn new() -> WorkerResult<Self> {
        let storage = S3Client::from_env().await?;

        let store_config = StoreConfig::from_env();
        let analyses = DynamoAnalysisStore::new(&store_config).await?;
        let statuses = DynamoStatusStore::new(&store_config).await?;

        let summarizer = SummarizerClient::from_env()?;

        Ok(Self {
            storage: Arc::new(storage),
            analyses: Arc::new(analyses),
            statuses: Arc::new(statuses),
            summarizer: Arc::new(summarizer),
            keywords: KeywordTable::default(),
            lexicon: SentimentLexicon::default(),
        })
    }
}

/// Run the full analysis for one object-created notification.
///
/// Reads the handoff record, summarizes the transcript chunk by chunk,
/// categorizes and scores it, looks up comparable videos, persists the
/// analysis record, and marks the originating request completed.
pub async fn process_object_created(
    ctx: &ProcessingContext,
    event: &ObjectCreatedEvent,
) -> WorkerResult<FinalResult> {
    let bytes = ctx.storage.get_object(&event.key).await?;
    let record: HandoffRecord = serde_json::from_slice(&bytes)?;

    if record.transcript.is_empty() {
        return Err(WorkerError::missing_transcript(format!(
            "no transcript in handoff record {}",
            event.key
        )));
    }

    info!(
        "Analyzing {} ({} transcript chars)",
        record.id,
        record.transcript.chars().count()
    );

    // Summarize chunk by chunk, in order. Any failed chunk aborts the
    // whole analysis.
    let chunks = chunk_text(&record.transcript, MAX_CHUNK_CHARS);
    let mut summaries = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        summaries.push(ctx.summarizer.summarize(chunk).await?);
    }
    let summary = summaries.join(" ");

    // Categorization and sentiment run on the joined summary, not the
    // raw transcript.
    let category = ctx.keywords.classify(&summary);
    let sentiment_score = ctx.lexicon.score(&summary);

    // Suggestion lookup is fail-soft: a store fault degrades to the
    // empty-suggestions fallback rather than failing the analysis.
    let links = match ctx.analyses.top_videos(category, MIN_SUGGESTION_SCORE).await {
        Ok(links) => links,
        Err(e) => {
            warn!("Comparable-video lookup failed for {}: {}", record.id, e);
            Vec::new()
        }
    };
    let video_suggestions = render_suggestions(&links);

    let final_result = FinalResult {
        video_id: record.id.clone(),
        category,
        sentiment_score_percentage: score_percentage(sentiment_score),
        sentiment_feedback: feedback_message(sentiment_score, category),
        video_suggestions: video_suggestions.clone(),
    };
    let final_json = serde_json::to_string(&final_result)?;

    let analysis = AnalysisRecord {
        video_id: record.id.clone(),
        input_text: record.transcript.clone(),
        summary,
        category,
        sentiment_score,
        video_suggestions,
        final_result: final_json.clone(),
    };
    ctx.analyses.put(&analysis).await?;

    ctx.statuses
        .mark_completed(&record.request_id, &final_json)
        .await?;

    info!(
        "Completed analysis for {}: category={}, sentiment={}",
        record.id, category, sentiment_score
    );

    Ok(final_result)
}
