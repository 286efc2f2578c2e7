// src/web/handlers/dashboard_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::dashboard::{build_dashboard, DashboardCard};
use crate::web::types::{AppState, DataResponse};

pub async fn dashboard_handler(state: &State<AppState>) -> Json<DataResponse<Vec<DashboardCard>>> {
    let catalog = state.catalog.read().await;
    let summaries = catalog.summaries();
    let cards = build_dashboard(catalog.is_linked(), &state.account_dialog_url, &summaries);

    info!(
        "Dashboard requested: {} CVs, account linked: {}",
        summaries.len(),
        catalog.is_linked()
    );

    Json(DataResponse::success(
        format!("{} resumes", summaries.len()),
        cards,
        None,
    ))
}
