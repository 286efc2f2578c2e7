// src/suggestions/overlay.rs
use serde::Serialize;

use super::prompt::DEFAULT_GENERATED_TEXT;

/// What the suggestion panel is rendered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionDialog {
    pub prompt: String,
    pub default_context: String,
    pub default_generated_text: String,
}

impl SuggestionDialog {
    pub fn new(prompt: String, default_context: String) -> Self {
        Self {
            prompt,
            default_context,
            default_generated_text: DEFAULT_GENERATED_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionOverlay {
    #[default]
    Closed,
    Open(SuggestionDialog),
}

impl SuggestionOverlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn dialog(&self) -> Option<&SuggestionDialog> {
        match self {
            Self::Open(dialog) => Some(dialog),
            Self::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}
