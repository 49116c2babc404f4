use axum::{Form, extract::State, http::StatusCode, response::Html};
use fitplan_core::domain::{
    profile::value_objects::ProfileSubmission, recommendation::ports::RecommendationService,
};
use tracing::{error, info};
use validator::Validate;

use crate::application::http::{
    recommendation::{
        validators::RecommendationRequest,
        views::{render_form_page, render_result_page},
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Browser flavour of the pipeline: every outcome is an HTML page.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(payload): Form<RecommendationRequest>,
) -> (StatusCode, Html<String>) {
    let root_path = &state.args.server.root_path;

    if let Err(e) = payload.validate() {
        let submission = ProfileSubmission::from(payload);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_form_page(root_path, &submission, Some(&e.to_string()))),
        );
    }

    let submission = ProfileSubmission::from(payload);

    match state.service.recommend(submission.clone()).await {
        Ok(recommendation) => {
            info!(id = %recommendation.id, "rendering recommendation page");
            (
                StatusCode::OK,
                Html(render_result_page(root_path, &recommendation)),
            )
        }
        Err(e) if e.is_validation() => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_form_page(root_path, &submission, Some(&e.to_string()))),
        ),
        Err(e) => {
            error!("Failed to generate recommendation: {}", e);
            let api_error = ApiError::from(e);
            (
                api_error.status(),
                Html(render_form_page(
                    root_path,
                    &submission,
                    Some("We could not get your recommendations right now. Please try again."),
                )),
            )
        }
    }
}
