use axum::{extract::State, Json};
use indexmap::IndexMap;

use crate::models::Activity;
use crate::services::activities_service;
use crate::web::SharedRegistry;

pub async fn activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&registry))
}
