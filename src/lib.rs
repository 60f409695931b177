pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpJokeSource, TerminalDisplay};
pub use config::Settings;
pub use crate::core::{app::JokeApp, app::RunSummary, fetcher::JokeFetcher};
pub use domain::model::Joke;
pub use utils::error::{JokeError, Result};
