use crate::classifier::Classifier;
use crate::config::FetchConfig;
use crate::dedup::DedupSet;
use crate::feeds::FeedSpec;
use crate::fetcher::Fetcher;
use crate::notion::Publisher;
use crate::types::{NewsItem, Result};
use chrono::{Duration, Utc};
use tracing::{error, info, warn};

/// Outcome counts for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub found: usize,
    pub published: usize,
    pub duplicates: usize,
    pub failures: usize,
}

/// Drives one pass of the pipeline: fetch, classify, dedupe, publish.
pub struct NewsCollector {
    feeds: Vec<FeedSpec>,
    fetcher: Fetcher,
    classifier: Classifier,
    publisher: Box<dyn Publisher>,
}

impl NewsCollector {
    pub fn new(
        feeds: Vec<FeedSpec>,
        fetch_config: FetchConfig,
        classifier: Classifier,
        publisher: Box<dyn Publisher>,
    ) -> Self {
        Self {
            feeds,
            fetcher: Fetcher::new(fetch_config),
            classifier,
            publisher,
        }
    }

    /// One full pass over the registry with the given recency window.
    pub async fn run(&self, days: u32) -> Result<RunReport> {
        let candidates = self.collect(days).await;
        info!(
            "{} articles found across {} feeds",
            candidates.len(),
            self.feeds.len()
        );

        self.process(candidates).await
    }

    /// Fetch every feed, tolerating per-feed failures.
    async fn collect(&self, days: u32) -> Vec<NewsItem> {
        let cutoff = Utc::now() - Duration::days(i64::from(days));
        let mut candidates = Vec::new();

        for feed in &self.feeds {
            match self.fetcher.fetch(feed, cutoff).await {
                Ok(items) => candidates.extend(items),
                Err(e) => warn!("Skipping feed {}: {}", feed.name, e),
            }
        }

        candidates
    }

    /// Classify, dedupe and publish already-fetched candidates. Per-article
    /// failures are tolerated; only the dedup set fetch aborts the run, since
    /// publishing without it could insert duplicates.
    pub async fn process(&self, candidates: Vec<NewsItem>) -> Result<RunReport> {
        let mut report = RunReport {
            found: candidates.len(),
            ..Default::default()
        };

        let mut dedup = DedupSet::new(self.publisher.existing_source_urls().await?);
        info!(
            "{} URLs already published via {}",
            dedup.len(),
            self.publisher.name()
        );

        for item in candidates {
            let article = self.classifier.classify(item).await;

            if dedup.contains(&article.item.url) {
                info!("Already published, skipping: {}", article.item.url);
                report.duplicates += 1;
                continue;
            }

            match self.publisher.publish(&article).await {
                Ok(()) => {
                    dedup.insert(&article.item.url);
                    report.published += 1;
                }
                Err(e) => {
                    error!("Publish failed for {}: {}", article.item.url, e);
                    report.failures += 1;
                }
            }
        }

        Ok(report)
    }
}
