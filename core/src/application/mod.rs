use tracing::info;

use crate::{
    domain::common::{FitPlanConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type FitPlanService = Service<GeminiLLMClient>;

pub async fn create_service(config: FitPlanConfig) -> Result<FitPlanService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    info!(model = %config.llm.gemini_model, "gemini client ready");

    Ok(Service::new(llm_client))
}
