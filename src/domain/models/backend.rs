use anyhow::Result;
use async_trait::async_trait;

use super::BackendPrompt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendResponse {
    pub text: String,
}

#[async_trait]
pub trait Backend {
    /// Requests a single completion for the prompt and returns the full text
    /// of the first choice. One call is made per user turn.
    async fn get_completion(&self, prompt: BackendPrompt) -> Result<BackendResponse>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
