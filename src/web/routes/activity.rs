use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path, Query, State},
    http::request::Parts,
    Json,
};
use tracing::warn;

use crate::services::activities_service::{self, CommandOutcome};
use crate::web::error::ApiError;
use crate::web::SharedRegistry;

/// The `email` query parameter. When it is repeated the last value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEmail(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ParticipantEmail
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| ParticipantEmail(value))
            .ok_or_else(|| {
                ApiError::MalformedRequest("Missing required query parameter `email`".to_string())
            })
    }
}

pub async fn activity_signup_handler(
    State(registry): State<SharedRegistry>,
    path: Result<Path<String>, PathRejection>,
    ParticipantEmail(email): ParticipantEmail,
) -> Result<Json<CommandOutcome>, ApiError> {
    let Path(activity_name) = path?;
    activities_service::sign_up(&registry, &activity_name, &email)
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            e.into()
        })
}

pub async fn activity_unregister_handler(
    State(registry): State<SharedRegistry>,
    path: Result<Path<String>, PathRejection>,
    ParticipantEmail(email): ParticipantEmail,
) -> Result<Json<CommandOutcome>, ApiError> {
    let Path(activity_name) = path?;
    activities_service::unregister(&registry, &activity_name, &email)
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            e.into()
        })
}
