use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{GenerationSettings, LLMConfig, entities::app_errors::CoreError},
    recommendation::ports::LLMClient,
};

#[derive(Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    generation: GenerationSettings,
    client: Client,
}

impl fmt::Debug for GeminiLLMClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiLLMClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl From<&GenerationSettings> for GenerationConfig {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_p: settings.top_p,
            top_k: settings.top_k,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            generation: config.generation.clone(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    fn build_request(&self, prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig::from(&self.generation)),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        extract_text(gemini_response)
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GeminiResponse) -> Result<String, CoreError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(CoreError::ExternalServiceError(
            "No response from LLM".to_string(),
        ));
    }

    Ok(text)
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = self.build_request(prompt);

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::domain::common::DEFAULT_GEMINI_BASE_URL;

    fn config() -> LLMConfig {
        LLMConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-pro".to_string(),
            gemini_base_url: format!("{}/", DEFAULT_GEMINI_BASE_URL),
            generation: GenerationSettings::default(),
            request_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn endpoint_does_not_carry_the_key() {
        let client = GeminiLLMClient::new(&config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn request_carries_prompt_and_generation_config() {
        let client = GeminiLLMClient::new(&config()).unwrap();
        let body = serde_json::to_value(client.build_request("hello".to_string())).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generation_config": {
                    "temperature": 0.6f32,
                    "top_p": 1.0,
                    "top_k": 1,
                    "max_output_tokens": 2048
                }
            })
        );
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "## Home workouts\n" }, { "text": "1. Squats" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "## Home workouts\n1. Squats");
    }

    #[test]
    fn blocked_prompt_is_an_external_error() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        assert_eq!(
            extract_text(response),
            Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string()
            ))
        );
    }
}
