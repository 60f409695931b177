// Adapters layer: concrete implementations for the joke source and the display surface.

pub mod http;
pub mod terminal;

pub use http::HttpJokeSource;
pub use terminal::TerminalDisplay;
