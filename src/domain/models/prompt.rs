#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Message;

pub const SYSTEM_PROMPT: &str = r#"
You are a Career Psychologist and Talent Analyst.
Analyze the user's thoughts for:
1. Skills (Hard and Soft).
2. Core Values (e.g., freedom, high-income, social impact).
3. Best-fit career paths.
4. A concrete next step (Roadmap).

IMPORTANT: Your response must always follow this structure:
[CONVERSATION]
(Write your friendly, professional career advice here)

[DATA]
{
  "skills": ["Skill1", "Skill2"],
  "values": ["Value1", "Value2"],
  "paths": ["Career1", "Career2"],
  "roadmap": "Specific next action step"
}
"#;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

/// Everything the completion backend needs for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendPrompt {
    pub credential: String,
    pub messages: Vec<PromptMessage>,
}

impl BackendPrompt {
    /// Places the instructions first, followed by the transcript in order.
    /// With a non zero `history_limit` only the latest messages are sent.
    pub fn compose(credential: &str, transcript: &[Message], history_limit: usize) -> BackendPrompt {
        let mut skip = 0;
        if history_limit > 0 && transcript.len() > history_limit {
            skip = transcript.len() - history_limit;
        }

        let mut messages = vec![PromptMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        }];
        messages.extend(transcript.iter().skip(skip).map(|message| {
            return PromptMessage {
                role: message.role.as_api_role().to_string(),
                content: message.text.to_string(),
            };
        }));

        return BackendPrompt {
            credential: credential.to_string(),
            messages,
        };
    }
}
