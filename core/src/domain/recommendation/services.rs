use tracing::{debug, info};

use crate::domain::{
    bmi::services::calculate_bmi,
    common::{entities::app_errors::CoreError, services::Service},
    profile::{services::validate_profile, value_objects::ProfileSubmission},
    recommendation::{
        entities::Recommendation,
        ports::{LLMClient, RecommendationService},
        prompt::render_prompt,
    },
};

impl<LLM> RecommendationService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn recommend(&self, submission: ProfileSubmission) -> Result<Recommendation, CoreError> {
        // 1. Validate every field before anything leaves the process
        let profile = validate_profile(submission)?;

        // 2. Render prompt
        let prompt = render_prompt(&profile);
        debug!(prompt = %prompt, "rendered recommendation prompt");

        // 3. Call LLM
        let text = self.llm_client.generate_with_text(prompt).await?;

        // 4. BMI from the same validated metrics
        let bmi = calculate_bmi(profile.weight_kg(), profile.height_cm());
        info!(bmi = bmi.value, category = %bmi.category, "recommendation generated");

        Ok(Recommendation::new(text, bmi))
    }
}
