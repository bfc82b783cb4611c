use crate::types::{ClassifiedItem, CollectorError, Result};
use crate::utils::truncate_chars;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashSet;
use tracing::{debug, info};

const NOTION_API_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";
const QUERY_PAGE_SIZE: usize = 100;

const TITLE_CHARS: usize = 100;
const SUMMARY_CHARS: usize = 200;
const PARAGRAPH_CHARS: usize = 2000;
const MAX_MULTI_SELECT: usize = 5;
const MAX_KEY_POINTS: usize = 5;
const SENTENCES_PER_PARAGRAPH: usize = 3;

/// Destination for classified articles. `existing_source_urls` seeds the
/// dedup set; `publish` writes one article and treats each independently.
#[async_trait]
pub trait Publisher: Send + Sync {
    fn name(&self) -> &str;

    async fn existing_source_urls(&self) -> Result<HashSet<String>>;

    async fn publish(&self, article: &ClassifiedItem) -> Result<()>;
}

/// Publishes into a Notion database using the Korean news schema.
pub struct NotionPublisher {
    client: Client,
    api_key: String,
    database_id: String,
}

impl NotionPublisher {
    pub fn new(api_key: String, database_id: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            database_id,
        }
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}{}", NOTION_API_URL, path))
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Notion error bodies carry a human-readable "message" field
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(body);
            return Err(CollectorError::NotionApi {
                status: status.as_u16(),
                message: truncate_chars(&message, 200),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Publisher for NotionPublisher {
    fn name(&self) -> &str {
        "notion"
    }

    async fn existing_source_urls(&self) -> Result<HashSet<String>> {
        let mut urls = HashSet::new();
        let mut cursor: Option<String> = None;

        loop {
            let payload = query_payload(cursor.as_deref());
            let page = self
                .post(&format!("/databases/{}/query", self.database_id), &payload)
                .await?;

            for row in page
                .get("results")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
            {
                if let Some(url) = row.pointer("/properties/출처/url").and_then(Value::as_str) {
                    urls.insert(url.to_string());
                }
            }

            cursor = if page.get("has_more").and_then(Value::as_bool).unwrap_or(false) {
                page.get("next_cursor")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            } else {
                None
            };
            if cursor.is_none() {
                break;
            }
        }

        debug!("Fetched {} existing source URLs from Notion", urls.len());
        Ok(urls)
    }

    async fn publish(&self, article: &ClassifiedItem) -> Result<()> {
        let payload = json!({
            "parent": { "database_id": self.database_id },
            "properties": page_properties(article),
            "children": page_children(article),
        });

        self.post("/pages", &payload).await?;
        info!("Uploaded to Notion: {}", truncate_chars(&article.item.title, 40));
        Ok(())
    }
}

fn query_payload(cursor: Option<&str>) -> Value {
    match cursor {
        Some(cursor) => json!({ "page_size": QUERY_PAGE_SIZE, "start_cursor": cursor }),
        None => json!({ "page_size": QUERY_PAGE_SIZE }),
    }
}

fn page_properties(article: &ClassifiedItem) -> Value {
    let item = &article.item;
    let analysis = &article.analysis;

    let technologies: Vec<Value> = analysis
        .technologies
        .iter()
        .take(MAX_MULTI_SELECT)
        .map(|tech| json!({ "name": tech.label() }))
        .collect();

    json!({
        "제목": { "title": [{ "text": { "content": truncate_chars(&item.title, TITLE_CHARS) } }] },
        "날짜": { "date": { "start": item.published_at.format("%Y-%m-%d").to_string() } },
        "출처": { "url": item.url },
        "요약": { "rich_text": [{ "text": { "content": truncate_chars(&analysis.summary, SUMMARY_CHARS) } }] },
        "관련 기술": { "multi_select": technologies },
        "기업/기관": { "select": { "name": analysis.organization.label() } },
        "중요도": { "select": { "name": analysis.importance.label() } },
    })
}

/// Page body: summary callout, key points, the untouched article text split
/// into readable paragraphs, a source bookmark and a meta footer.
fn page_children(article: &ClassifiedItem) -> Vec<Value> {
    let item = &article.item;
    let analysis = &article.analysis;
    let mut children = Vec::new();

    let summary = if analysis.summary.is_empty() {
        "요약 없음"
    } else {
        analysis.summary.as_str()
    };
    children.push(callout(summary, "💡", "blue_background"));

    if !analysis.key_points.is_empty() {
        children.push(heading("📌 핵심 포인트"));
        for point in analysis.key_points.iter().take(MAX_KEY_POINTS) {
            children.push(json!({
                "object": "block",
                "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": rich_text(point) },
            }));
        }
    }

    children.push(divider());
    children.push(heading("📰 원문 내용"));
    for paragraph in split_into_paragraphs(&item.content) {
        children.push(json!({
            "object": "block",
            "type": "paragraph",
            "paragraph": { "rich_text": rich_text(&truncate_chars(&paragraph, PARAGRAPH_CHARS)) },
        }));
    }

    children.push(divider());
    children.push(heading("🔗 출처"));
    children.push(json!({
        "object": "block",
        "type": "bookmark",
        "bookmark": { "url": item.url },
    }));

    let meta = format!(
        "📅 발행일: {} | 📰 출처: {}",
        item.published_at.format("%Y-%m-%d"),
        item.source
    );
    children.push(callout(&meta, "ℹ️", "gray_background"));

    children
}

fn rich_text(content: &str) -> Value {
    json!([{ "type": "text", "text": { "content": content } }])
}

fn heading(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "heading_2",
        "heading_2": { "rich_text": rich_text(text) },
    })
}

fn callout(text: &str, emoji: &str, color: &str) -> Value {
    json!({
        "object": "block",
        "type": "callout",
        "callout": {
            "rich_text": rich_text(text),
            "icon": { "emoji": emoji },
            "color": color,
        },
    })
}

fn divider() -> Value {
    json!({ "object": "block", "type": "divider", "divider": {} })
}

/// Split article text into paragraphs without altering it: existing newline
/// structure wins, otherwise sentences are grouped three to a paragraph.
fn split_into_paragraphs(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    if text.contains("\n\n") {
        return text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }

    if text.contains('\n') {
        return text
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }

    // Sentence boundary: terminal punctuation followed by whitespace,
    // covering both Korean and English articles
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?' | '。')
            && chars.peek().is_some_and(|next| next.is_whitespace())
        {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
        }
    }
    let last = current.trim();
    if !last.is_empty() {
        sentences.push(last.to_string());
    }

    sentences
        .chunks(SENTENCES_PER_PARAGRAPH)
        .map(|chunk| chunk.join(" "))
        .collect()
}
