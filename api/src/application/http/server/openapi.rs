use crate::application::http::health::HealthApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitPlan API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
