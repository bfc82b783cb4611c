use serde::{Deserialize, Serialize};

/// One feed in the static registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSpec {
    pub name: String,
    pub url: String,
    pub language: String,
}

impl FeedSpec {
    pub fn new(name: &str, url: &str, language: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            language: language.to_string(),
        }
    }
}

/// Curated list of AI news feeds this collector watches.
pub fn default_feeds() -> Vec<FeedSpec> {
    vec![
        // Korean outlets
        FeedSpec::new("AI타임스", "https://www.aitimes.com/rss/allArticle.xml", "ko"),
        FeedSpec::new("인공지능신문", "https://www.aitimes.kr/rss/allArticle.xml", "ko"),
        // English outlets
        FeedSpec::new(
            "MIT Tech Review AI",
            "https://www.technologyreview.com/topic/artificial-intelligence/feed",
            "en",
        ),
        FeedSpec::new("VentureBeat AI", "https://venturebeat.com/category/ai/feed/", "en"),
        FeedSpec::new(
            "The Verge AI",
            "https://www.theverge.com/rss/ai-artificial-intelligence/index.xml",
            "en",
        ),
    ]
}
