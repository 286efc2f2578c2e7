// src/web/handlers/suggestion_handlers.rs
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{debug, error, info};

use crate::suggestions::{phrase_within_bounds, suggestion_prompt, SuggestionDialog};
use crate::web::types::{
    ApiError, AppState, DataResponse, StandardErrorResponse, StandardRequest, SuggestionData,
    SuggestionRequest, WithConversationId,
};

fn missing_job(conversation_id: Option<String>) -> ApiError {
    (
        Status::UnprocessableEntity,
        Json(StandardErrorResponse::new(
            "A job title is required to generate suggestions".to_string(),
            "VALIDATION_ERROR".to_string(),
            vec!["Fill in the job title first".to_string()],
            conversation_id,
        )),
    )
}

/// Overlay contents for a job title, without calling the generator
pub async fn suggestion_dialog_handler(job: String) -> Result<Json<DataResponse<SuggestionDialog>>, ApiError> {
    if job.is_empty() {
        return Err(missing_job(None));
    }

    let dialog = SuggestionDialog::new(suggestion_prompt(&job), job);
    Ok(Json(DataResponse::success(
        "Suggestion dialog".to_string(),
        dialog,
        None,
    )))
}

pub async fn generate_suggestions_handler(
    request: Json<StandardRequest<SuggestionRequest>>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<SuggestionData>>, ApiError> {
    let conversation_id = request.conversation_id();
    let job = request.data.job.as_str();
    if job.is_empty() {
        return Err(missing_job(conversation_id));
    }

    let dialog = SuggestionDialog::new(
        suggestion_prompt(job),
        request
            .data
            .context
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| job.to_string()),
    );

    info!("Generating suggestions for job title: {}", job);

    match state
        .suggestions
        .generate(&dialog.prompt, &dialog.default_context)
        .await
    {
        Ok(batch) => {
            let out_of_bounds = batch
                .candidates
                .iter()
                .filter(|c| !phrase_within_bounds(c))
                .count();
            if out_of_bounds > 0 {
                debug!(
                    "{} of {} candidates outside the requested length range",
                    out_of_bounds,
                    batch.candidates.len()
                );
            }

            Ok(Json(DataResponse::success(
                format!("{} suggestions", batch.candidates.len()),
                SuggestionData {
                    prompt: dialog.prompt,
                    default_context: dialog.default_context,
                    default_generated_text: dialog.default_generated_text,
                    candidates: batch.candidates,
                    generated_text: batch.raw_text,
                },
                conversation_id,
            )))
        }
        Err(e) => {
            error!("Suggestion generation failed: {:#}", e);
            Err((
                Status::BadGateway,
                Json(StandardErrorResponse::new(
                    "Suggestion service unavailable".to_string(),
                    "SUGGESTION_SERVICE_ERROR".to_string(),
                    vec![
                        "Try again in a few moments".to_string(),
                        "Write the description manually".to_string(),
                    ],
                    conversation_id,
                )),
            ))
        }
    }
}
