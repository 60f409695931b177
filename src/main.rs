use clap::Parser;
use joke_fetcher::utils::{logger, validation::Validate};
use joke_fetcher::{CliConfig, HttpJokeSource, JokeApp, JokeFetcher, TerminalDisplay};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting joke-fetcher");
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source = match HttpJokeSource::new(&settings) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!("🌐 Joke endpoint: {}", source.url());

    let display = TerminalDisplay::stdout().with_error_prefix(settings.error_prefix.clone());
    let app = JokeApp::new(JokeFetcher::new(source, display));

    let summary = if cli.once {
        app.run_once().await?
    } else {
        eprintln!("Press Enter for another joke, q to quit.");
        app.run(BufReader::new(tokio::io::stdin())).await?
    };

    // 單次模式下抓取失敗以非零結束碼回報
    let exit_code = if cli.once && summary.failed > 0 { 2 } else { 0 };

    // stdin 的阻塞讀取會讓 runtime 關閉時卡住，直接結束行程
    std::process::exit(exit_code);
}
