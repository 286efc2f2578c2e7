// src/web/handlers/helpers.rs
use rocket::http::Status;
use rocket::serde::json::Json;

use crate::errors::EditorError;
use crate::web::types::{ApiError, StandardErrorResponse};

pub fn cv_not_found(cv_id: i64, conversation_id: Option<String>) -> ApiError {
    (
        Status::NotFound,
        Json(StandardErrorResponse::new(
            format!("CV {} not found", cv_id),
            "NOT_FOUND".to_string(),
            vec!["Reload the dashboard to get the current CV list".to_string()],
            conversation_id,
        )),
    )
}

/// Map an editor failure to a status and user-facing suggestions
pub fn editor_error(error: EditorError, conversation_id: Option<String>) -> ApiError {
    let (status, suggestions) = match &error {
        e if e.is_validation() => (
            Status::UnprocessableEntity,
            vec![
                "Job title and start date are required".to_string(),
                "Provide an end date or mark the position as ongoing".to_string(),
            ],
        ),
        EditorError::InvalidDate { .. } => (
            Status::BadRequest,
            vec!["Dates must use the YYYY-MM-DD format".to_string()],
        ),
        EditorError::UnknownField(_) => (
            Status::BadRequest,
            vec!["Check the experience field names".to_string()],
        ),
        EditorError::ExperienceNotFound(_) => (
            Status::NotFound,
            vec!["The experience may have been deleted, reload the CV".to_string()],
        ),
        _ => (Status::Conflict, Vec::new()),
    };

    (
        status,
        Json(StandardErrorResponse::new(
            error.to_string(),
            error.error_code().to_string(),
            suggestions,
            conversation_id,
        )),
    )
}
