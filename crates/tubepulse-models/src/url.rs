//! Video identifier extraction from YouTube URLs.

use thiserror::Error;

/// Errors that can occur during video ID extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),
}

/// Result type for video ID extraction.
pub type UrlResult<T> = Result<T, UrlError>;

/// Extract the canonical video identifier from a YouTube URL.
///
/// Two formats are recognized:
/// - `...v=VIDEO_ID...`: the text after the first `v=` up to the first
///   following `&`, or end of string.
/// - `...youtu.be/VIDEO_ID...`: the text after `youtu.be/` up to the first
///   `?`, or end of string.
///
/// Any other string fails with [`UrlError::InvalidUrl`].
pub fn extract_video_id(url: &str) -> UrlResult<String> {
    if let Some(pos) = url.find("v=") {
        let rest = &url[pos + 2..];
        let end = rest.find('&').unwrap_or(rest.len());
        return Ok(rest[..end].to_string());
    }

    if let Some(pos) = url.find("youtu.be/") {
        let rest = &url[pos + 9..];
        let end = rest.find('?').unwrap_or(rest.len());
        return Ok(rest[..end].to_string());
    }

    Err(UrlError::InvalidUrl(url.to_string()))
}
