use super::handlers::{
    create_recommendation::{__path_create_recommendation, create_recommendation},
    get_form::get_form,
    submit_form::submit_form,
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_recommendation))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/", state.args.server.root_path),
            get(get_form).post(submit_form),
        )
        .route(
            &format!("{}/recommendations", state.args.server.root_path),
            post(create_recommendation),
        )
}
