pub mod create_recommendation;
pub mod get_form;
pub mod submit_form;
