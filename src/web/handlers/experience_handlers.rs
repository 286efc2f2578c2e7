// src/web/handlers/experience_handlers.rs

use chrono::Utc;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

use super::helpers::{cv_not_found, editor_error};
use crate::editor::{DeleteOutcome, ExperienceEditor, RecordingHost, SaveOutcome};
use crate::types::{Experience, ExperienceId};
use crate::web::types::{
    ActionResponse, ApiError, AppState, DataResponse, ExperienceRequest, StandardErrorResponse,
    StandardRequest, WithConversationId,
};

pub async fn list_experiences_handler(
    cv_id: i64,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Vec<Experience>>>, ApiError> {
    let catalog = state.catalog.read().await;
    let store = catalog.store(cv_id).ok_or_else(|| cv_not_found(cv_id, None))?;
    let experiences = store.experiences().to_vec();

    Ok(Json(DataResponse::success(
        format!("{} experiences", experiences.len()),
        experiences,
        None,
    )))
}

pub async fn create_experience_handler(
    cv_id: i64,
    request: Json<StandardRequest<ExperienceRequest>>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Experience>>, ApiError> {
    let conversation_id = request.conversation_id();
    let mut editor = ExperienceEditor::create(Utc::now());
    request
        .data
        .apply(&mut editor)
        .map_err(|e| editor_error(e, conversation_id.clone()))?;

    let mut catalog = state.catalog.write().await;
    let store = catalog
        .store_mut(cv_id)
        .ok_or_else(|| cv_not_found(cv_id, conversation_id.clone()))?;

    let mut host = RecordingHost::default();
    let outcome = editor
        .save(store, &mut host)
        .map_err(|e| editor_error(e, conversation_id.clone()))?;

    info!("CV {}: {:?}", cv_id, outcome);
    Ok(Json(DataResponse::success(
        "Experience added".to_string(),
        editor.draft().clone(),
        conversation_id,
    )))
}

pub async fn update_experience_handler(
    cv_id: i64,
    experience_id: i64,
    request: Json<StandardRequest<ExperienceRequest>>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Experience>>, ApiError> {
    let conversation_id = request.conversation_id();
    let mut catalog = state.catalog.write().await;
    let store = catalog
        .store_mut(cv_id)
        .ok_or_else(|| cv_not_found(cv_id, conversation_id.clone()))?;

    let mut editor = ExperienceEditor::edit(store, ExperienceId(experience_id))
        .map_err(|e| editor_error(e, conversation_id.clone()))?;
    request
        .data
        .apply(&mut editor)
        .map_err(|e| editor_error(e, conversation_id.clone()))?;

    let mut host = RecordingHost::default();
    let outcome = editor
        .save(store, &mut host)
        .map_err(|e| editor_error(e, conversation_id.clone()))?;

    match outcome {
        SaveOutcome::Replaced(id) => info!("CV {}: replaced experience {}", cv_id, id),
        SaveOutcome::Appended(id) => warn!("CV {}: update appended experience {}", cv_id, id),
    }

    Ok(Json(DataResponse::success(
        "Experience updated".to_string(),
        editor.draft().clone(),
        conversation_id,
    )))
}

pub async fn delete_experience_handler(
    cv_id: i64,
    experience_id: i64,
    confirm: Option<bool>,
    state: &State<AppState>,
) -> Result<Json<ActionResponse>, ApiError> {
    let mut catalog = state.catalog.write().await;
    let store = catalog
        .store_mut(cv_id)
        .ok_or_else(|| cv_not_found(cv_id, None))?;

    let mut editor = ExperienceEditor::edit(store, ExperienceId(experience_id))
        .map_err(|e| editor_error(e, None))?;

    let mut host = RecordingHost::confirming(confirm.unwrap_or(false));
    match editor
        .delete(store, &mut host)
        .map_err(|e| editor_error(e, None))?
    {
        DeleteOutcome::Deleted(id) => {
            info!("CV {}: deleted experience {}", cv_id, id);
            Ok(Json(ActionResponse::success(
                format!("Experience {} deleted", id),
                "deleted".to_string(),
                None,
            )))
        }
        DeleteOutcome::Declined => Err((
            Status::Conflict,
            Json(StandardErrorResponse::new(
                host.questions
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "Deletion not confirmed".to_string()),
                "CONFIRMATION_REQUIRED".to_string(),
                vec!["Repeat the request with confirm=true".to_string()],
                None,
            )),
        )),
    }
}
