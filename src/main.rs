use ai_news_collector::{
    default_feeds, Classifier, ClaudeAnalyzer, CollectorConfig, FetchConfig, MarkdownPublisher,
    NewsCollector, NotionPublisher, Publisher,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ai-news-collector",
    about = "Collects AI news from RSS feeds, classifies it and publishes to Notion or markdown files"
)]
struct Cli {
    /// Recency window in days
    #[arg(long, default_value_t = 1)]
    days: u32,

    /// Skip the Claude API and classify with keywords only
    #[arg(long)]
    no_claude: bool,

    /// Write per-date markdown files instead of Notion rows
    #[arg(long)]
    no_notion: bool,

    /// Destination directory for markdown files
    #[arg(long, default_value = "news")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = CollectorConfig::from_env();

    // Credential problems surface here, before any network work
    let publisher: Box<dyn Publisher> = if cli.no_notion {
        Box::new(MarkdownPublisher::new(cli.output_dir.clone()))
    } else {
        let (api_key, database_id) = config.require_notion()?;
        Box::new(NotionPublisher::new(api_key, database_id))
    };

    let classifier = if cli.no_claude {
        Classifier::keyword_only()
    } else if let Some(api_key) = config.anthropic_api_key.clone() {
        Classifier::with_analyzer(Box::new(ClaudeAnalyzer::new(api_key)))
    } else {
        warn!("ANTHROPIC_API_KEY not set, falling back to keyword classification");
        Classifier::keyword_only()
    };

    info!("Collecting AI news from the last {} day(s)", cli.days);

    let collector = NewsCollector::new(
        default_feeds(),
        FetchConfig::default(),
        classifier,
        publisher,
    );
    let report = collector.run(cli.days).await?;

    info!(
        "Done: {} found, {} published, {} duplicates skipped, {} failed",
        report.found, report.published, report.duplicates, report.failures
    );

    Ok(())
}
