pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod dedup;
pub mod export;
pub mod feeds;
pub mod fetcher;
pub mod keywords;
pub mod notion;
pub mod pipeline;
pub mod types;
pub mod utils;

pub use analyzer::{ClaudeAnalyzer, NewsAnalyzer};
pub use classifier::{keyword_classify, Classifier};
pub use config::{CollectorConfig, FetchConfig};
pub use dedup::DedupSet;
pub use export::MarkdownPublisher;
pub use feeds::{default_feeds, FeedSpec};
pub use fetcher::Fetcher;
pub use notion::{NotionPublisher, Publisher};
pub use pipeline::{NewsCollector, RunReport};
pub use types::*;
