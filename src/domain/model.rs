use crate::utils::error::{JokeError, Result};
use serde::{Deserialize, Serialize};

/// A single joke, rendered verbatim and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub text: String,
}

/// JokeAPI v2 response body. Successful and error bodies share this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeResponse {
    #[serde(default)]
    pub error: bool,
    pub joke: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub joke_type: Option<String>,
    pub id: Option<u64>,
    pub lang: Option<String>,
    pub safe: Option<bool>,

    // 僅在 error = true 時出現
    pub code: Option<u16>,
    pub message: Option<String>,
    pub additional_info: Option<String>,
}

impl TryFrom<JokeResponse> for Joke {
    type Error = JokeError;

    fn try_from(response: JokeResponse) -> Result<Self> {
        if response.error {
            let message = response
                .additional_info
                .or(response.message)
                .unwrap_or_else(|| "unknown API error".to_string());
            return Err(JokeError::malformed(match response.code {
                Some(code) => format!("API error {}: {}", code, message),
                None => format!("API error: {}", message),
            }));
        }

        match response.joke {
            Some(text) if !text.trim().is_empty() => Ok(Joke { text }),
            Some(_) => Err(JokeError::malformed("joke field is empty")),
            None => Err(JokeError::malformed("response has no joke field")),
        }
    }
}
