// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::catalog::CvCatalog;
use crate::core::{ConfigManager, SuggestionClient};
use crate::dashboard::DashboardCard;
use crate::suggestions::SuggestionDialog;
use crate::types::Experience;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, post, put, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[get("/dashboard")]
pub async fn dashboard(state: &State<AppState>) -> Json<DataResponse<Vec<DashboardCard>>> {
    handlers::dashboard_handler(state).await
}

#[get("/cvs/<cv_id>/experiences")]
pub async fn list_experiences(
    cv_id: i64,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Vec<Experience>>>, ApiError> {
    handlers::list_experiences_handler(cv_id, state).await
}

#[post("/cvs/<cv_id>/experiences", data = "<request>")]
pub async fn create_experience(
    cv_id: i64,
    request: Json<StandardRequest<ExperienceRequest>>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Experience>>, ApiError> {
    handlers::create_experience_handler(cv_id, request, state).await
}

#[put("/cvs/<cv_id>/experiences/<experience_id>", data = "<request>")]
pub async fn update_experience(
    cv_id: i64,
    experience_id: i64,
    request: Json<StandardRequest<ExperienceRequest>>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Experience>>, ApiError> {
    handlers::update_experience_handler(cv_id, experience_id, request, state).await
}

#[delete("/cvs/<cv_id>/experiences/<experience_id>?<confirm>")]
pub async fn delete_experience(
    cv_id: i64,
    experience_id: i64,
    confirm: Option<bool>,
    state: &State<AppState>,
) -> Result<Json<ActionResponse>, ApiError> {
    handlers::delete_experience_handler(cv_id, experience_id, confirm, state).await
}

#[get("/suggestions/dialog?<job>")]
pub async fn suggestion_dialog(
    job: String,
) -> Result<Json<DataResponse<SuggestionDialog>>, ApiError> {
    handlers::suggestion_dialog_handler(job).await
}

#[post("/suggestions", data = "<request>")]
pub async fn generate_suggestions(
    request: Json<StandardRequest<SuggestionRequest>>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<SuggestionData>>, ApiError> {
    handlers::generate_suggestions_handler(request, state).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path".to_string()],
        None,
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "BAD_REQUEST".to_string(),
        vec!["Verify field names and value types".to_string()],
        None,
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
        None,
    ))
}

/// Assemble the rocket instance around prepared state
pub fn build_rocket(rocket: Rocket<Build>, state: AppState) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(state)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![
                health,
                dashboard,
                list_experiences,
                create_experience,
                update_experience,
                delete_experience,
                suggestion_dialog,
                generate_suggestions,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let catalog = CvCatalog::load(&config.server.catalog_path).await?;
    let suggestions = SuggestionClient::new(
        config.service.suggestion_url.clone(),
        config.service.timeout_seconds,
    )?;
    let state = AppState::new(catalog, config.server.account_dialog_url.clone(), suggestions);

    info!("Starting cvdesk API server");
    info!("Catalog: {}", config.server.catalog_path.display());
    info!("Suggestion service: {}", config.service.suggestion_url);
    info!("Server: http://0.0.0.0:{}", config.server.port);

    let figment = rocket::Config::figment()
        .merge(("port", config.server.port))
        .merge(("address", "0.0.0.0"));

    build_rocket(rocket::custom(figment), state)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
