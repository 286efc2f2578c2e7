// src/web/types.rs - request/response envelopes and managed state

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::catalog::CvCatalog;
use crate::core::SuggestionClient;
use crate::editor::ExperienceEditor;
use crate::errors::EditorResult;
use crate::types::ExperienceField;

/// Shared state managed by rocket
pub struct AppState {
    pub catalog: RwLock<CvCatalog>,
    pub account_dialog_url: String,
    pub suggestions: SuggestionClient,
}

impl AppState {
    pub fn new(catalog: CvCatalog, account_dialog_url: String, suggestions: SuggestionClient) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            account_dialog_url,
            suggestions,
        }
    }
}

/// Experience form values; absent fields are left as they are in the draft
#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ExperienceRequest {
    pub job: Option<String>,
    pub starting_date: Option<String>,
    pub finishing_date: Option<String>,
    pub on_course: Option<bool>,
    pub description: Option<String>,
}

impl ExperienceRequest {
    pub fn apply(&self, editor: &mut ExperienceEditor) -> EditorResult<()> {
        if let Some(job) = &self.job {
            editor.set_field(ExperienceField::Job, job)?;
        }
        if let Some(date) = &self.starting_date {
            editor.set_field(ExperienceField::StartingDate, date)?;
        }
        if let Some(date) = &self.finishing_date {
            editor.set_field(ExperienceField::FinishingDate, date)?;
        }
        if let Some(on_course) = self.on_course {
            editor.set_on_course(on_course);
        }
        if let Some(description) = &self.description {
            editor.set_description(description);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SuggestionRequest {
    pub job: String,
    pub context: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SuggestionData {
    pub prompt: String,
    pub default_context: String,
    pub default_generated_text: String,
    pub candidates: Vec<String>,
    pub generated_text: String,
}

// STANDARD RESPONSE TYPES

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Action,
    Error,
}

/// Error side of every handler: status plus the standard error body
pub type ApiError = (Status, Json<StandardErrorResponse>);

// Request types with conversation_id support
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardRequest<T> {
    #[serde(flatten)]
    pub data: T,
    pub conversation_id: Option<String>,
}

// Helper trait for extracting conversation_id
pub trait WithConversationId {
    fn conversation_id(&self) -> Option<String>;
}

impl<T> WithConversationId for StandardRequest<T> {
    fn conversation_id(&self) -> Option<String> {
        self.conversation_id.clone()
    }
}

// Helper functions to create standard responses
impl TextResponse {
    pub fn success(message: String, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
            conversation_id,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
            conversation_id,
        }
    }
}

impl ActionResponse {
    pub fn success(message: String, action: String, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Action,
            success: true,
            message,
            action,
            conversation_id,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(
        error: String,
        error_code: String,
        suggestions: Vec<String>,
        conversation_id: Option<String>,
    ) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
            conversation_id,
        }
    }
}
