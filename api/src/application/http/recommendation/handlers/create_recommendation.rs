use axum::extract::State;
use fitplan_core::domain::{
    profile::value_objects::ProfileSubmission,
    recommendation::{entities::Recommendation, ports::RecommendationService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::RecommendationRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    pub data: Recommendation,
    /// `Your BMI: <value> (<category>)`
    pub summary: String,
}

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "recommendation",
    summary = "Generate diet and fitness recommendations",
    description = "Validates the profile, asks the language model for workouts and meal ideas, and computes the BMI",
    responses(
        (status = 200, body = RecommendationResponse),
        (status = 422, body = ErrorResponse),
        (status = 502, body = ErrorResponse)
    ),
    request_body = RecommendationRequest
)]
pub async fn create_recommendation(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendationRequest>,
) -> Result<Response<RecommendationResponse>, ApiError> {
    let recommendation = state
        .service
        .recommend(ProfileSubmission::from(payload))
        .await
        .map_err(|e| {
            if !e.is_validation() {
                tracing::error!("Failed to generate recommendation: {}", e);
            }
            ApiError::from(e)
        })?;

    let summary = recommendation.bmi_summary();

    Ok(Response::OK(RecommendationResponse {
        data: recommendation,
        summary,
    }))
}
