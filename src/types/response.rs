use serde::{Deserialize, Serialize};

// ===== Service Response Types =====

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionServiceResponse {
    pub generated_text: String,
    pub status: String,
    pub message: Option<String>,
}

/// Phrase candidates produced for one prompt, with the text they were split from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionBatch {
    pub candidates: Vec<String>,
    pub raw_text: String,
}
