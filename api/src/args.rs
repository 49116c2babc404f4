use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use fitplan_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, FitPlanConfig, GenerationSettings, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "fitplan", version, about = "Personalized diet and fitness recommendations")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, without a trailing slash.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_TEMPERATURE", default_value_t = 0.6)]
    pub temperature: f32,

    #[arg(long, env = "GEMINI_TOP_P", default_value_t = 1.0)]
    pub top_p: f32,

    #[arg(long, env = "GEMINI_TOP_K", default_value_t = 1)]
    pub top_k: u32,

    #[arg(long, env = "GEMINI_MAX_OUTPUT_TOKENS", default_value_t = 2048)]
    pub max_output_tokens: u32,

    /// Upper bound for a single generation call.
    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmArgs")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for FitPlanConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                generation: GenerationSettings {
                    temperature: args.llm.temperature,
                    top_p: args.llm.top_p,
                    top_k: args.llm.top_k,
                    max_output_tokens: args.llm.max_output_tokens,
                },
                request_timeout: Duration::from_secs(args.llm.request_timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_generation_settings() {
        let args = Args::parse_from(["fitplan", "--gemini-api-key", "k"]);
        let config = FitPlanConfig::from(args);

        assert_eq!(config.llm.gemini_api_key, "k");
        assert_eq!(config.llm.generation, GenerationSettings::default());
        assert_eq!(config.llm.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "fitplan",
            "--gemini-api-key",
            "k",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let args = Args::parse_from(["fitplan", "--gemini-api-key", "very-secret"]);
        assert!(!format!("{:?}", args).contains("very-secret"));
    }
}
