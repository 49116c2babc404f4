use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::value_objects::ProfileSubmission,
    recommendation::entities::Recommendation,
};

/// LLM Client trait for calling the text generation model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a single prompt and returns the model text untouched.
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the diet and fitness recommendation pipeline
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        submission: ProfileSubmission,
    ) -> impl Future<Output = Result<Recommendation, CoreError>> + Send;
}
