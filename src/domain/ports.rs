use crate::domain::model::Joke;
use crate::utils::error::{JokeError, Result};
use async_trait::async_trait;

#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch_joke(&self) -> Result<Joke>;
}

/// The surface a joke is rendered on. Each call replaces what is shown.
pub trait DisplaySurface: Send + Sync {
    fn show_joke(&self, joke: &Joke) -> Result<()>;
    fn show_error(&self, error: &JokeError) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn blacklist_flags(&self) -> &[String];
    fn joke_type(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
