use crate::config::AppConfig;
use crate::llm::client::GroqClient;

pub struct AppState {
    pub llm: GroqClient,
    pub model_name: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            llm: GroqClient::new(config)?,
            model_name: config.model.clone(),
        })
    }
}
