use crate::core::fetcher::JokeFetcher;
use crate::domain::model::Joke;
use crate::domain::ports::{DisplaySurface, JokeSource};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub requests: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: std::result::Result<Result<Joke>, JoinError>) {
        match outcome {
            Ok(Ok(_)) => self.succeeded += 1,
            Ok(Err(_)) => self.failed += 1,
            Err(e) => {
                tracing::error!("Joke task aborted: {}", e);
                self.failed += 1;
            }
        }
    }
}

/// Wires the fetcher to its triggers: one fetch at startup, one per activation.
///
/// Every activation spawns an independent fetch. Nothing is cancelled or
/// debounced, so when fetches overlap the one that resolves last owns the
/// display.
pub struct JokeApp<S: JokeSource + 'static, D: DisplaySurface + 'static> {
    fetcher: JokeFetcher<S, D>,
}

impl<S: JokeSource + 'static, D: DisplaySurface + 'static> JokeApp<S, D> {
    pub fn new(fetcher: JokeFetcher<S, D>) -> Self {
        Self { fetcher }
    }

    pub async fn run_once(&self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            requests: 1,
            ..Default::default()
        };
        summary.record(Ok(self.fetcher.fetch_and_display().await));
        Ok(summary)
    }

    /// Reads activations line by line until EOF or `q`, then waits for
    /// every fetch still in flight. Lines are taken as raw bytes, so any
    /// line that is not `q` counts as an activation.
    pub async fn run<R: AsyncBufRead + Unpin>(&self, triggers: R) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut tasks = JoinSet::new();

        tracing::debug!("Startup fetch");
        self.spawn_fetch(&mut tasks, &mut summary);

        let read_result = self.read_activations(triggers, &mut tasks, &mut summary).await;
        if let Err(e) = &read_result {
            tracing::error!("❌ Reading activations failed: {}", e);
        }

        // 讀取失敗時也要等所有請求完成，不可取消
        while let Some(outcome) = tasks.join_next().await {
            summary.record(outcome);
        }

        tracing::info!(
            "Session finished: {} requests, {} succeeded, {} failed",
            summary.requests,
            summary.succeeded,
            summary.failed
        );
        read_result.map(|_| summary)
    }

    async fn read_activations<R: AsyncBufRead + Unpin>(
        &self,
        triggers: R,
        tasks: &mut JoinSet<Result<Joke>>,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let mut segments = triggers.split(b'\n');
        while let Some(bytes) = segments.next_segment().await? {
            if is_quit_command(&String::from_utf8_lossy(&bytes)) {
                tracing::debug!("Quit requested");
                break;
            }

            tracing::debug!("Activation received, spawning fetch #{}", summary.requests + 1);
            self.spawn_fetch(tasks, summary);

            // 回收已完成的任務，避免 JoinSet 無限成長
            while let Some(outcome) = tasks.try_join_next() {
                summary.record(outcome);
            }
        }
        Ok(())
    }

    fn spawn_fetch(&self, tasks: &mut JoinSet<Result<Joke>>, summary: &mut RunSummary) {
        let fetcher = self.fetcher.clone();
        tasks.spawn(async move { fetcher.fetch_and_display().await });
        summary.requests += 1;
    }
}

fn is_quit_command(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::JokeError;
    use async_trait::async_trait;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::task::{Context, Poll};
    use std::time::Duration;
    use tokio::io::{AsyncRead, AsyncReadExt, BufReader, ReadBuf};

    /// Reader that fails on every read.
    struct BrokenPipe;

    impl AsyncRead for BrokenPipe {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<std::io::Result<()>> {
            Poll::Ready(Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdin closed",
            )))
        }
    }

    /// Call N sleeps `delays[N]` ms and returns "joke N".
    struct DelayedSource {
        calls: AtomicUsize,
        delays: Vec<u64>,
    }

    #[async_trait]
    impl JokeSource for DelayedSource {
        async fn fetch_joke(&self) -> Result<Joke> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = self.delays.get(n).copied().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(Joke {
                text: format!("joke {}", n),
            })
        }
    }

    #[derive(Default)]
    struct HistoryDisplay {
        shown: Mutex<Vec<String>>,
    }

    impl DisplaySurface for HistoryDisplay {
        fn show_joke(&self, joke: &Joke) -> Result<()> {
            self.shown.lock().unwrap().push(joke.text.clone());
            Ok(())
        }

        fn show_error(&self, error: &JokeError) -> Result<()> {
            self.shown.lock().unwrap().push(error.to_string());
            Ok(())
        }
    }

    fn app(delays: Vec<u64>) -> JokeApp<DelayedSource, HistoryDisplay> {
        let source = DelayedSource {
            calls: AtomicUsize::new(0),
            delays,
        };
        JokeApp::new(JokeFetcher::new(source, HistoryDisplay::default()))
    }

    #[tokio::test]
    async fn test_startup_fetch_without_activations() {
        let app = app(vec![]);

        let summary = app.run(&b""[..]).await.unwrap();

        assert_eq!(summary.requests, 1);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(*app.fetcher.display().shown.lock().unwrap(), vec!["joke 0"]);
    }

    #[tokio::test]
    async fn test_each_activation_fetches_once() {
        let app = app(vec![]);

        let summary = app.run(&b"\n\n\n"[..]).await.unwrap();

        assert_eq!(summary.requests, 4);
        assert_eq!(app.fetcher.display().shown.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_quit_stops_reading_activations() {
        let app = app(vec![]);

        let summary = app.run(&b"\nq\n\n\n"[..]).await.unwrap();

        assert_eq!(summary.requests, 2);
    }

    #[tokio::test]
    async fn test_last_resolved_wins() {
        // 第一個請求較慢，比第二個晚回來
        let app = app(vec![200, 10]);

        app.run(&b"\n"[..]).await.unwrap();

        let shown = app.fetcher.display().shown.lock().unwrap().clone();
        assert_eq!(shown, vec!["joke 1", "joke 0"]);
    }

    #[tokio::test]
    async fn test_non_utf8_line_counts_as_activation() {
        let app = app(vec![200, 200, 200, 200]);

        let summary = app.run(&b"\n\xff\n\n"[..]).await.unwrap();

        assert_eq!(summary.requests, 4);
        assert_eq!(summary.succeeded, 4);
        assert_eq!(app.fetcher.display().shown.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_read_error_keeps_in_flight_fetches() {
        let app = app(vec![200, 200]);
        let triggers = BufReader::new((&b"\n"[..]).chain(BrokenPipe));

        let err = app.run(triggers).await.unwrap_err();

        assert!(matches!(err, JokeError::IoError(_)));
        let mut shown = app.fetcher.display().shown.lock().unwrap().clone();
        shown.sort();
        assert_eq!(shown, vec!["joke 0", "joke 1"]);
    }

    #[test]
    fn test_is_quit_command() {
        assert!(is_quit_command("q"));
        assert!(is_quit_command(" QUIT "));
        assert!(!is_quit_command(""));
        assert!(!is_quit_command("another"));
    }
}
