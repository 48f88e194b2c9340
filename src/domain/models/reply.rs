#[cfg(test)]
#[path = "reply_test.rs"]
mod tests;

use super::Analysis;

pub const CONVERSATION_LABEL: &str = "[CONVERSATION]";
pub const DATA_MARKER: &str = "[DATA]";
pub const DASHBOARD_APOLOGY: &str =
    "I've analyzed that, but had trouble updating the dashboard. Let's continue!";

/// A model reply after splitting off the structured block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// The marker was found and the payload decoded.
    Structured {
        conversation: String,
        analysis: Analysis,
    },
    /// No marker, the whole reply is conversation.
    Unstructured { conversation: String },
    /// The marker was found but the payload could not be decoded. The
    /// conversation is replaced with an apology.
    Malformed { conversation: String, error: String },
}

impl Reply {
    pub fn parse(text: &str) -> Reply {
        let (conversation, payload) = match text.split_once(DATA_MARKER) {
            Some(parts) => parts,
            None => {
                return Reply::Unstructured {
                    conversation: text.trim().to_string(),
                };
            }
        };

        let trimmed = conversation.trim();
        let conversation = trimmed
            .strip_prefix(CONVERSATION_LABEL)
            .unwrap_or(trimmed)
            .trim()
            .to_string();

        match Analysis::from_json(payload) {
            Ok(analysis) => {
                return Reply::Structured {
                    conversation,
                    analysis,
                };
            }
            Err(err) => {
                return Reply::Malformed {
                    conversation: DASHBOARD_APOLOGY.to_string(),
                    error: err.to_string(),
                };
            }
        }
    }

    /// Human readable portion that is stored in the transcript.
    pub fn conversation(&self) -> &str {
        match self {
            Reply::Structured { conversation, .. } => return conversation,
            Reply::Unstructured { conversation } => return conversation,
            Reply::Malformed { conversation, .. } => return conversation,
        }
    }
}
