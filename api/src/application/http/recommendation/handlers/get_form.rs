use axum::{extract::State, response::Html};
use fitplan_core::domain::profile::value_objects::ProfileSubmission;

use crate::application::http::{
    recommendation::views::render_form_page, server::app_state::AppState,
};

pub async fn get_form(State(state): State<AppState>) -> Html<String> {
    Html(render_form_page(
        &state.args.server.root_path,
        &ProfileSubmission::default(),
        None,
    ))
}
