#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::PromptMessage;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<PromptMessage>,
    stream: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionChoiceResponse {
    message: CompletionMessageResponse,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoiceResponse>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorDetailResponse {
    message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorResponse {
    error: ErrorDetailResponse,
}

pub struct OpenAI {
    url: String,
    model: String,
}

impl Default for OpenAI {
    fn default() -> OpenAI {
        return OpenAI {
            url: Config::get(ConfigKey::OpenAiURL),
            model: Config::get(ConfigKey::Model),
        };
    }
}

#[async_trait]
impl Backend for OpenAI {
    #[allow(clippy::implicit_return)]
    async fn get_completion(&self, prompt: BackendPrompt) -> Result<BackendResponse> {
        if self.url.is_empty() {
            bail!("OpenAI URL is not defined");
        }
        if prompt.credential.is_empty() {
            bail!("OpenAI API key is not defined");
        }

        let req = CompletionRequest {
            model: self.model.to_string(),
            messages: prompt.messages,
            stream: false,
        };

        tracing::debug!(
            model = req.model,
            messages = req.messages.len(),
            "Requesting completion"
        );

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1/chat/completions",
                url = self.url.trim_end_matches('/')
            ))
            .header("Authorization", format!("Bearer {}", prompt.credential))
            .json(&req)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                "Failed to make completion request to OpenAI"
            );

            if let Ok(err_res) = serde_json::from_str::<ErrorResponse>(&body) {
                bail!(format!(
                    "OpenAI returned {}: {}",
                    status.as_u16(),
                    err_res.error.message
                ));
            }
            bail!(format!("OpenAI returned {}", status.as_u16()));
        }

        let ores = res.json::<CompletionResponse>().await?;
        tracing::debug!(body = ?ores, "Completion response");

        let text = match ores.choices.into_iter().next() {
            Some(choice) => choice.message.content.unwrap_or_default(),
            None => bail!("OpenAI returned no completion choices"),
        };

        return Ok(BackendResponse { text });
    }
}
