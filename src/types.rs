use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single article pulled from a feed, normalized and ready for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
    pub language: String,
}

/// Technology categories matching the Notion multi-select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechCategory {
    #[serde(rename = "LLM")]
    Llm,
    #[serde(rename = "이미지 생성")]
    ImageGeneration,
    #[serde(rename = "추론 AI")]
    Reasoning,
    #[serde(rename = "에이전트")]
    Agent,
    #[serde(rename = "멀티모달")]
    Multimodal,
    #[serde(rename = "오픈소스")]
    OpenSource,
    #[serde(rename = "강화학습")]
    ReinforcementLearning,
    #[serde(rename = "로보틱스")]
    Robotics,
    #[serde(rename = "음성/오디오")]
    VoiceAudio,
}

impl TechCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TechCategory::Llm => "LLM",
            TechCategory::ImageGeneration => "이미지 생성",
            TechCategory::Reasoning => "추론 AI",
            TechCategory::Agent => "에이전트",
            TechCategory::Multimodal => "멀티모달",
            TechCategory::OpenSource => "오픈소스",
            TechCategory::ReinforcementLearning => "강화학습",
            TechCategory::Robotics => "로보틱스",
            TechCategory::VoiceAudio => "음성/오디오",
        }
    }
}

/// Organizations matching the Notion select options. Anything outside the
/// known set maps to `Other` ("기타") rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Organization {
    OpenAi,
    Google,
    Anthropic,
    Meta,
    Microsoft,
    Nvidia,
    KoreanResearch,
    Other,
}

impl Organization {
    pub fn label(&self) -> &'static str {
        match self {
            Organization::OpenAi => "OpenAI",
            Organization::Google => "Google",
            Organization::Anthropic => "Anthropic",
            Organization::Meta => "Meta",
            Organization::Microsoft => "Microsoft",
            Organization::Nvidia => "NVIDIA",
            Organization::KoreanResearch => "국내 연구기관",
            Organization::Other => "기타",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "OpenAI" => Organization::OpenAi,
            "Google" => Organization::Google,
            "Anthropic" => Organization::Anthropic,
            "Meta" => Organization::Meta,
            "Microsoft" => Organization::Microsoft,
            "NVIDIA" => Organization::Nvidia,
            "국내 연구기관" => Organization::KoreanResearch,
            _ => Organization::Other,
        }
    }
}

impl From<String> for Organization {
    fn from(label: String) -> Self {
        Organization::from_label(&label)
    }
}

impl From<Organization> for String {
    fn from(org: Organization) -> Self {
        org.label().to_string()
    }
}

/// Importance tiers matching the Notion select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    #[serde(rename = "🔥 주요")]
    Major,
    #[serde(rename = "📌 일반")]
    Normal,
    #[serde(rename = "📝 참고")]
    Reference,
}

impl Importance {
    pub fn label(&self) -> &'static str {
        match self {
            Importance::Major => "🔥 주요",
            Importance::Normal => "📌 일반",
            Importance::Reference => "📝 참고",
        }
    }
}

/// Classification result for one article. The field names and value labels
/// line up with the JSON the Claude analysis prompt asks for, so a response
/// deserializes directly into this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsAnalysis {
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    pub technologies: Vec<TechCategory>,
    pub organization: Organization,
    pub importance: Importance,
}

/// An article together with its analysis, ready to publish.
#[derive(Debug, Clone)]
pub struct ClassifiedItem {
    pub item: NewsItem,
    pub analysis: NewsAnalysis,
}

#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Notion API error ({status}): {message}")]
    NotionApi { status: u16, message: String },

    #[error("Missing environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
