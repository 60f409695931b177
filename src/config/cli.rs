use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "joke-fetcher")]
#[command(about = "Fetch a random joke; press Enter for another, q to quit")]
pub struct CliConfig {
    /// Joke endpoint, without query string
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Categories excluded server-side, comma separated
    #[arg(long, value_delimiter = ',')]
    pub blacklist_flags: Option<Vec<String>>,

    #[arg(long)]
    pub joke_type: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fetch a single joke and exit
    #[arg(long)]
    pub once: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file_config = TomlConfig::from_file(path)?;
            settings.apply_toml(&file_config);
        }

        // 命令列參數優先於設定檔
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(flags) = &self.blacklist_flags {
            settings.blacklist_flags = flags.clone();
        }
        if let Some(joke_type) = &self.joke_type {
            settings.joke_type = joke_type.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if self.log_json {
            settings.json_logs = true;
        }

        Ok(settings)
    }
}
