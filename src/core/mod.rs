pub mod app;
pub mod fetcher;

pub use crate::domain::model::Joke;
pub use crate::domain::ports::{ConfigProvider, DisplaySurface, JokeSource};
pub use crate::utils::error::Result;
