use crate::notion::Publisher;
use crate::types::{ClassifiedItem, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

const SOURCE_LINE_PREFIX: &str = "- 출처: ";

/// Publishes articles into per-date markdown files instead of Notion. Each
/// article's source URL sits on its own `출처:` line so later runs rebuild
/// the dedup set by re-scanning the files.
pub struct MarkdownPublisher {
    output_dir: PathBuf,
}

impl MarkdownPublisher {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn render(article: &ClassifiedItem) -> String {
        let item = &article.item;
        let analysis = &article.analysis;

        let mut out = String::new();
        out.push_str(&format!("## {}\n\n", item.title));
        out.push_str(&format!("{}{}\n", SOURCE_LINE_PREFIX, item.url));
        out.push_str(&format!(
            "- 발행일: {} | 피드: {}\n",
            item.published_at.format("%Y-%m-%d"),
            item.source
        ));
        out.push_str(&format!(
            "- 기업/기관: {} | 중요도: {}\n",
            analysis.organization.label(),
            analysis.importance.label()
        ));
        let technologies: Vec<&str> = analysis.technologies.iter().map(|t| t.label()).collect();
        out.push_str(&format!("- 관련 기술: {}\n\n", technologies.join(", ")));

        out.push_str(&format!("{}\n", analysis.summary));
        if !analysis.key_points.is_empty() {
            out.push('\n');
            for point in &analysis.key_points {
                out.push_str(&format!("- {}\n", point));
            }
        }
        out.push_str("\n---\n\n");
        out
    }
}

#[async_trait]
impl Publisher for MarkdownPublisher {
    fn name(&self) -> &str {
        "markdown"
    }

    async fn existing_source_urls(&self) -> Result<HashSet<String>> {
        let mut urls = HashSet::new();

        // First run: nothing exported yet
        if !self.output_dir.exists() {
            return Ok(urls);
        }

        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let text = fs::read_to_string(&path)?;
            for line in text.lines() {
                if let Some(url) = line.strip_prefix(SOURCE_LINE_PREFIX) {
                    urls.insert(url.trim().to_string());
                }
            }
        }

        debug!(
            "Found {} source URLs under {}",
            urls.len(),
            self.output_dir.display()
        );
        Ok(urls)
    }

    async fn publish(&self, article: &ClassifiedItem) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;

        let date = article.item.published_at.format("%Y-%m-%d");
        let path = self.output_dir.join(format!("{}.md", date));
        let new_file = !path.exists();

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        if new_file {
            writeln!(file, "# {} AI 뉴스\n", date)?;
        }
        write!(file, "{}", MarkdownPublisher::render(article))?;

        info!("Saved to {}", path.display());
        Ok(())
    }
}
