use crate::domain::model::{Joke, JokeResponse};
use crate::domain::ports::{ConfigProvider, JokeSource};
use crate::utils::error::{JokeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://v2.jokeapi.dev/joke/Any";
pub const DEFAULT_BLACKLIST_FLAGS: [&str; 6] = [
    "nsfw",
    "religious",
    "political",
    "racist",
    "sexist",
    "explicit",
];
pub const DEFAULT_JOKE_TYPE: &str = "single";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

pub fn default_blacklist_flags() -> Vec<String> {
    DEFAULT_BLACKLIST_FLAGS
        .iter()
        .map(|flag| flag.to_string())
        .collect()
}

/// Builds `<endpoint>?blacklistFlags=a,b,c&type=<joke_type>`.
///
/// The query is set as a raw string: form encoding would turn the commas
/// into `%2C`, and the flag list must reach the server literally.
pub fn build_request_url(endpoint: &str, blacklist_flags: &[String], joke_type: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| JokeError::InvalidConfigValueError {
        field: "endpoint".to_string(),
        value: endpoint.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    let query = format!(
        "blacklistFlags={}&type={}",
        blacklist_flags.join(","),
        joke_type
    );
    url.set_query(Some(&query));

    Ok(url)
}

pub struct HttpJokeSource {
    client: Client,
    url: Url,
}

impl HttpJokeSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let url = build_request_url(
            config.endpoint(),
            config.blacklist_flags(),
            config.joke_type(),
        )?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    async fn fetch_joke(&self) -> Result<Joke> {
        tracing::debug!("Making joke request to: {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Joke API response status: {}", status);

        if !status.is_success() {
            // JokeAPI 以 4xx 回傳 {"error": true, ...}，服務有回應就算格式錯誤
            if status.is_client_error() {
                let body = response.text().await.unwrap_or_default();
                if let Ok(parsed) = serde_json::from_str::<JokeResponse>(&body) {
                    if parsed.error {
                        return Joke::try_from(parsed);
                    }
                }
            }

            return Err(JokeError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        // 先取文字再解析，JSON 錯誤才會被歸類為格式錯誤
        let body = response.text().await?;
        let parsed: JokeResponse = serde_json::from_str(&body)?;

        Joke::try_from(parsed)
    }
}
