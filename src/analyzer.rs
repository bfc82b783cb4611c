use crate::types::{CollectorError, NewsAnalysis, Result};
use crate::utils::truncate_chars;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const MAX_CONTENT_CHARS: usize = 3000;

/// Delegated analysis of a single article. Implementations return an error
/// on any failure; the classifier handles the keyword fallback.
#[async_trait]
pub trait NewsAnalyzer: Send + Sync {
    fn name(&self) -> &str;

    async fn analyze(&self, title: &str, content: &str) -> Result<NewsAnalysis>;
}

/// Analyzer backed by the Anthropic Messages API.
pub struct ClaudeAnalyzer {
    client: Client,
    api_key: String,
}

impl ClaudeAnalyzer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl NewsAnalyzer for ClaudeAnalyzer {
    fn name(&self) -> &str {
        "claude"
    }

    async fn analyze(&self, title: &str, content: &str) -> Result<NewsAnalysis> {
        let payload = json!({
            "model": CLAUDE_MODEL,
            "max_tokens": 1000,
            "messages": [{"role": "user", "content": build_prompt(title, content)}],
        });

        debug!("Requesting analysis for: {}", title);

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CollectorError::Analysis(format!(
                "API returned {}: {}",
                status,
                truncate_chars(&body, 200)
            )));
        }

        let body: Value = response.json().await?;
        let text = body
            .pointer("/content/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                CollectorError::Analysis("unexpected response structure".to_string())
            })?;

        parse_analysis(text)
    }
}

fn build_prompt(title: &str, content: &str) -> String {
    format!(
        r#"다음 AI 관련 뉴스를 분석해주세요.

제목: {title}
내용: {content}

중요: 원문의 내용을 절대 수정, 삭제, 추가하지 마세요. 분석만 해주세요.

다음 JSON 형식으로 응답해주세요:
{{
    "summary": "원문 내용을 바탕으로 2-3문장 요약 (한국어)",
    "key_points": ["기사에서 직접 추출한 핵심 포인트 1", "핵심 포인트 2", "핵심 포인트 3"],
    "technologies": ["관련 기술 목록 - LLM, 이미지 생성, 추론 AI, 에이전트, 멀티모달, 오픈소스, 강화학습, 로보틱스, 음성/오디오 중 선택"],
    "organization": "주요 기업/기관 - OpenAI, Google, Anthropic, Meta, Microsoft, NVIDIA, 국내 연구기관, 기타 중 선택",
    "importance": "중요도 - 🔥 주요, 📌 일반, 📝 참고 중 선택"
}}

JSON만 출력하세요."#,
        title = title,
        content = truncate_chars(content, MAX_CONTENT_CHARS),
    )
}

/// Extract a `NewsAnalysis` from model output. Models do not always return
/// bare JSON, so this tries direct parsing, then a ```json fence, then the
/// outermost brace span.
fn parse_analysis(text: &str) -> Result<NewsAnalysis> {
    if let Ok(analysis) = serde_json::from_str(text) {
        return Ok(analysis);
    }

    if let Some(block) = extract_fenced_json(text) {
        if let Ok(analysis) = serde_json::from_str(block) {
            return Ok(analysis);
        }
    }

    if let Some(span) = extract_brace_span(text) {
        if let Ok(analysis) = serde_json::from_str(span) {
            return Ok(analysis);
        }
    }

    Err(CollectorError::Analysis(format!(
        "no parseable JSON in response: {}",
        truncate_chars(text, 200)
    )))
}

fn extract_fenced_json(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

fn extract_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}
