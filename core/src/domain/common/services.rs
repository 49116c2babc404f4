/// Holds the outbound adapters the domain services need.
#[derive(Clone, Debug)]
pub struct Service<LLM> {
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM> {
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
