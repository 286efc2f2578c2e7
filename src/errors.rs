// src/errors.rs
use thiserror::Error;

use crate::types::cv_data::ExperienceId;

/// Toast text shown when a save is attempted on an incomplete draft
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all the required fields";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Job title is required")]
    MissingJobTitle,

    #[error("Start date is required")]
    MissingStartDate,

    #[error("End date is required unless the position is ongoing")]
    MissingEndDate,

    #[error("Invalid date for {field}: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Unknown experience field: {0}")]
    UnknownField(String),

    #[error("Experience not found: {0}")]
    ExperienceNotFound(ExperienceId),

    #[error("Only existing experiences can be deleted")]
    DeleteUnavailable,

    #[error("Suggestions need a job title and a closed overlay")]
    SuggestionsUnavailable,
}

impl EditorError {
    /// Required-field failures, reported to the user and retryable
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingJobTitle | Self::MissingStartDate | Self::MissingEndDate
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingJobTitle | Self::MissingStartDate | Self::MissingEndDate => {
                "VALIDATION_ERROR"
            }
            Self::InvalidDate { .. } | Self::UnknownField(_) => "BAD_FIELD",
            Self::ExperienceNotFound(_) => "NOT_FOUND",
            Self::DeleteUnavailable | Self::SuggestionsUnavailable => "ACTION_UNAVAILABLE",
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
