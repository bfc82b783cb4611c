use crate::types::{CollectorError, Result};

/// API credentials, read once at startup and passed into the collector.
#[derive(Debug, Clone, Default)]
pub struct CollectorConfig {
    pub notion_api_key: Option<String>,
    pub notion_database_id: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl CollectorConfig {
    /// Read credentials from the environment. Presence is enforced later,
    /// once CLI flags determine which backends are actually in use.
    pub fn from_env() -> Self {
        Self {
            notion_api_key: read_var("NOTION_API_KEY"),
            notion_database_id: read_var("NOTION_DATABASE_ID"),
            anthropic_api_key: read_var("ANTHROPIC_API_KEY"),
        }
    }

    /// Notion credentials, or a fatal configuration error naming the
    /// variable that is missing.
    pub fn require_notion(&self) -> Result<(String, String)> {
        let api_key = self
            .notion_api_key
            .clone()
            .ok_or(CollectorError::MissingEnv { name: "NOTION_API_KEY" })?;
        let database_id = self
            .notion_database_id
            .clone()
            .ok_or(CollectorError::MissingEnv { name: "NOTION_DATABASE_ID" })?;
        Ok((api_key, database_id))
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// HTTP behavior for feed retrieval.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_entries_per_feed: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            // Some feed hosts reject non-browser user agents.
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            timeout_seconds: 30,
            max_entries_per_feed: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_notion_names_the_missing_variable() {
        let config = CollectorConfig {
            notion_api_key: None,
            notion_database_id: Some("db".to_string()),
            anthropic_api_key: None,
        };
        let err = config.require_notion().unwrap_err();
        assert!(err.to_string().contains("NOTION_API_KEY"));

        let config = CollectorConfig {
            notion_api_key: Some("secret".to_string()),
            notion_database_id: None,
            anthropic_api_key: None,
        };
        let err = config.require_notion().unwrap_err();
        assert!(err.to_string().contains("NOTION_DATABASE_ID"));
    }

    #[test]
    fn require_notion_returns_both_credentials() {
        let config = CollectorConfig {
            notion_api_key: Some("secret".to_string()),
            notion_database_id: Some("db".to_string()),
            anthropic_api_key: None,
        };
        let (key, db) = config.require_notion().unwrap();
        assert_eq!(key, "secret");
        assert_eq!(db, "db");
    }
}
