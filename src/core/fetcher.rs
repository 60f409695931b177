use crate::domain::model::Joke;
use crate::domain::ports::{DisplaySurface, JokeSource};
use crate::utils::error::Result;
use std::sync::Arc;

/// Fetches one joke and puts it (or a fallback message) on the display.
///
/// Holds no state between calls; clones share the same source and display.
pub struct JokeFetcher<S: JokeSource, D: DisplaySurface> {
    source: Arc<S>,
    display: Arc<D>,
}

impl<S: JokeSource, D: DisplaySurface> Clone for JokeFetcher<S, D> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            display: Arc::clone(&self.display),
        }
    }
}

impl<S: JokeSource, D: DisplaySurface> JokeFetcher<S, D> {
    pub fn new(source: S, display: D) -> Self {
        Self {
            source: Arc::new(source),
            display: Arc::new(display),
        }
    }

    pub fn display(&self) -> &Arc<D> {
        &self.display
    }

    pub async fn fetch_and_display(&self) -> Result<Joke> {
        let joke = match self.source.fetch_joke().await {
            Ok(joke) => joke,
            Err(e) => {
                tracing::warn!(
                    "❌ Joke fetch failed: {} (Category: {:?})",
                    e,
                    e.category()
                );

                // 備援訊息寫不出去時只記錄，回傳原本的抓取錯誤
                if let Err(display_err) = self.display.show_error(&e) {
                    tracing::error!("Failed to render fallback message: {}", display_err);
                }
                return Err(e);
            }
        };

        tracing::debug!("Fetched joke ({} chars)", joke.text.len());
        self.display.show_joke(&joke)?;

        Ok(joke)
    }
}
