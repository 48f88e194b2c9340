#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;

use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;

pub const ROADMAP_PLACEHOLDER: &str = "Awaiting your thoughts...";

/// Structured dashboard state extracted from the latest well formed reply.
///
/// Every field is required when decoding. A payload that is missing a key, or
/// has a key with the wrong type, is rejected as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub skills: Vec<String>,
    pub values: Vec<String>,
    pub paths: Vec<String>,
    pub roadmap: String,
}

impl Default for Analysis {
    fn default() -> Analysis {
        return Analysis {
            skills: vec![],
            values: vec![],
            paths: vec![],
            roadmap: ROADMAP_PLACEHOLDER.to_string(),
        };
    }
}

impl Analysis {
    pub fn from_json(payload: &str) -> Result<Analysis> {
        let analysis = serde_json::from_str::<Analysis>(strip_code_fence(payload))?;
        return Ok(analysis);
    }
}

/// Models like to wrap JSON in a markdown fence even when told not to.
fn strip_code_fence(payload: &str) -> &str {
    let trimmed = payload.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let body = match trimmed.split_once('\n') {
        Some((_, rest)) => rest,
        None => return trimmed,
    };

    return body.trim_end().trim_end_matches("```").trim();
}
