//! Text extraction data structures.

use serde::Serialize;

use crate::error_handling::ScrapeError;

/// Outcome flag of an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    /// Text was extracted
    Success,
    /// Fetch or parse failed; no content is returned
    Failed,
}

/// Cleaned page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Newline-joined, trimmed, non-blank lines
    pub content: String,
    /// Whitespace-delimited tokens in `content`
    pub word_count: usize,
}

/// JSON body returned by `/extract`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    pub status: ExtractionStatus,
    /// Wall-clock seconds spent handling the request
    pub processing_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Builds the response body from an operation outcome.
    ///
    /// A failure never carries partial content.
    pub fn from_outcome(outcome: &Result<ExtractedText, ScrapeError>, processing_time: f64) -> Self {
        match outcome {
            Ok(text) => Self {
                content: Some(text.content.clone()),
                word_count: Some(text.word_count),
                status: ExtractionStatus::Success,
                processing_time,
                error: None,
            },
            Err(e) => Self {
                content: None,
                word_count: None,
                status: ExtractionStatus::Failed,
                processing_time,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization() {
        let outcome = Ok(ExtractedText {
            content: "hello world".to_string(),
            word_count: 2,
        });
        let json = serde_json::to_value(ExtractionResult::from_outcome(&outcome, 0.5)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["content"], "hello world");
        assert_eq!(json["word_count"], 2);
        assert_eq!(json["processing_time"], 0.5);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_has_no_content() {
        let outcome = Err(ScrapeError::Browser("crashed".to_string()));
        let json = serde_json::to_value(ExtractionResult::from_outcome(&outcome, 1.0)).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "Browser error: crashed");
        assert!(json.get("content").is_none());
        assert!(json.get("word_count").is_none());
    }
}
