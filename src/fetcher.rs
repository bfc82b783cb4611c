use crate::config::FetchConfig;
use crate::feeds::FeedSpec;
use crate::types::{CollectorError, NewsItem, Result};
use crate::utils::strip_html;
use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Retrieve one feed and return its entries inside the recency window.
    pub async fn fetch(&self, feed: &FeedSpec, cutoff: DateTime<Utc>) -> Result<Vec<NewsItem>> {
        debug!("Fetching feed: {} ({})", feed.name, feed.url);

        let response = self.client.get(&feed.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollectorError::General(format!(
                "HTTP {} fetching {}",
                status, feed.url
            )));
        }

        let body = response.bytes().await?;
        let items = self.candidates_from_feed(&body, feed, cutoff)?;

        info!("Feed {}: {} entries within window", feed.name, items.len());
        Ok(items)
    }

    /// Parse a feed document and normalize the entries that fall inside the
    /// window. Separate from the network call so tests can pass XML directly.
    pub fn candidates_from_feed(
        &self,
        content: &[u8],
        feed: &FeedSpec,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<NewsItem>> {
        let parsed = parser::parse(content)
            .map_err(|e| CollectorError::Parse(format!("{}: {}", feed.name, e)))?;

        let mut items = Vec::new();

        for entry in parsed
            .entries
            .into_iter()
            .take(self.config.max_entries_per_feed)
        {
            let Some(item) = normalize_entry(entry, feed) else {
                continue;
            };
            if item.published_at < cutoff {
                debug!("Outside window, skipping: {}", item.title);
                continue;
            }
            items.push(item);
        }

        Ok(items)
    }
}

fn normalize_entry(entry: feed_rs::model::Entry, feed: &FeedSpec) -> Option<NewsItem> {
    // The first link is the article URL; entries without one are unusable
    let url = entry.links.first()?.href.clone();

    let title = entry
        .title
        .map(|t| t.content)
        .unwrap_or_else(|| "Untitled".to_string());

    // Prefer full content over the summary when the feed carries both
    let raw_content = entry
        .content
        .and_then(|c| c.body)
        .filter(|body| !body.is_empty())
        .or_else(|| entry.summary.map(|s| s.content))
        .unwrap_or_default();

    // Entries without a usable date count as fresh; the dedup set keeps
    // them from being published twice across runs.
    let published_at = entry
        .published
        .or(entry.updated)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    Some(NewsItem {
        title,
        url,
        content: strip_html(&raw_content),
        published_at,
        source: feed.name.clone(),
        language: feed.language.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn test_feed() -> FeedSpec {
        FeedSpec::new("Test Feed", "https://example.com/rss.xml", "en")
    }

    fn rss_with_items(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Test Feed</title>
<link>https://example.com</link>
{items}
</channel>
</rss>"#
        )
    }

    #[test]
    fn recency_window_filters_old_entries() {
        let now = Utc::now();
        let fresh = now.to_rfc2822();
        let stale = (now - ChronoDuration::days(10)).to_rfc2822();
        let xml = rss_with_items(&format!(
            r#"<item>
<title>OpenAI releases new reasoning model</title>
<link>https://example.com/fresh</link>
<pubDate>{fresh}</pubDate>
</item>
<item>
<title>Old story</title>
<link>https://example.com/stale</link>
<pubDate>{stale}</pubDate>
</item>"#
        ));

        let fetcher = Fetcher::new(FetchConfig::default());
        let cutoff = now - ChronoDuration::days(1);
        let items = fetcher
            .candidates_from_feed(xml.as_bytes(), &test_feed(), cutoff)
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "OpenAI releases new reasoning model");
        assert_eq!(items[0].url, "https://example.com/fresh");
        assert_eq!(items[0].source, "Test Feed");
    }

    #[test]
    fn empty_window_returns_empty_without_error() {
        let stale = (Utc::now() - ChronoDuration::days(30)).to_rfc2822();
        let xml = rss_with_items(&format!(
            r#"<item>
<title>Ancient story</title>
<link>https://example.com/ancient</link>
<pubDate>{stale}</pubDate>
</item>"#
        ));

        let fetcher = Fetcher::new(FetchConfig::default());
        let cutoff = Utc::now() - ChronoDuration::days(1);
        let items = fetcher
            .candidates_from_feed(xml.as_bytes(), &test_feed(), cutoff)
            .unwrap();

        assert!(items.is_empty());
    }

    #[test]
    fn entry_without_date_counts_as_fresh() {
        let xml = rss_with_items(
            r#"<item>
<title>Undated story</title>
<link>https://example.com/undated</link>
</item>"#,
        );

        let fetcher = Fetcher::new(FetchConfig::default());
        let cutoff = Utc::now() - ChronoDuration::days(1);
        let items = fetcher
            .candidates_from_feed(xml.as_bytes(), &test_feed(), cutoff)
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Undated story");
    }

    #[test]
    fn html_is_stripped_from_entry_body() {
        let fresh = Utc::now().to_rfc2822();
        let xml = rss_with_items(&format!(
            r#"<item>
<title>Markup story</title>
<link>https://example.com/markup</link>
<pubDate>{fresh}</pubDate>
<description>&lt;p&gt;Plain &amp;amp; simple&lt;/p&gt;</description>
</item>"#
        ));

        let fetcher = Fetcher::new(FetchConfig::default());
        let cutoff = Utc::now() - ChronoDuration::days(1);
        let items = fetcher
            .candidates_from_feed(xml.as_bytes(), &test_feed(), cutoff)
            .unwrap();

        assert_eq!(items[0].content, "Plain & simple");
    }

    #[test]
    fn content_is_preferred_over_summary() {
        let fresh = Utc::now().to_rfc3339();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
<title>Test Feed</title>
<id>urn:test-feed</id>
<updated>{fresh}</updated>
<entry>
<title>Full body story</title>
<id>urn:entry-1</id>
<link href="https://example.com/full"/>
<updated>{fresh}</updated>
<summary>Short teaser</summary>
<content type="html">&lt;p&gt;The whole article text.&lt;/p&gt;</content>
</entry>
</feed>"#
        );

        let fetcher = Fetcher::new(FetchConfig::default());
        let cutoff = Utc::now() - ChronoDuration::days(1);
        let items = fetcher
            .candidates_from_feed(xml.as_bytes(), &test_feed(), cutoff)
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, "The whole article text.");
    }

    #[test]
    fn per_feed_entry_cap_applies() {
        let fresh = Utc::now().to_rfc2822();
        let many: String = (0..15)
            .map(|i| {
                format!(
                    r#"<item>
<title>Story {i}</title>
<link>https://example.com/{i}</link>
<pubDate>{fresh}</pubDate>
</item>"#
                )
            })
            .collect();
        let xml = rss_with_items(&many);

        let fetcher = Fetcher::new(FetchConfig::default());
        let cutoff = Utc::now() - ChronoDuration::days(1);
        let items = fetcher
            .candidates_from_feed(xml.as_bytes(), &test_feed(), cutoff)
            .unwrap();

        assert_eq!(items.len(), FetchConfig::default().max_entries_per_feed);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let fetcher = Fetcher::new(FetchConfig::default());
        let cutoff = Utc::now() - ChronoDuration::days(1);
        let result = fetcher.candidates_from_feed(b"not a feed at all", &test_feed(), cutoff);

        assert!(matches!(result, Err(CollectorError::Parse(_))));
    }
}
