use crate::types::{Organization, TechCategory};

/// Technology keyword table. Declaration order is match order, so repeated
/// runs over the same text always produce the same tag set. All patterns are
/// lowercase; matching lowercases the input text.
pub const TECH_KEYWORDS: &[(TechCategory, &[&str])] = &[
    (
        TechCategory::Llm,
        &[
            "llm",
            "large language model",
            "gpt",
            "claude",
            "gemini",
            "대형언어모델",
            "대규모 언어 모델",
            "chatgpt",
        ],
    ),
    (
        TechCategory::ImageGeneration,
        &[
            "image generation",
            "dall-e",
            "midjourney",
            "stable diffusion",
            "이미지 생성",
            "그림 생성",
            "text-to-image",
        ],
    ),
    (
        TechCategory::Reasoning,
        &["reasoning", "o1", "o3", "chain of thought", "추론", "사고", "thinking"],
    ),
    (
        TechCategory::Agent,
        &["agent", "agentic", "에이전트", "자율 에이전트", "autonomous"],
    ),
    (
        TechCategory::Multimodal,
        &["multimodal", "vision", "audio", "멀티모달", "다중모달", "비전"],
    ),
    (
        TechCategory::OpenSource,
        &["open source", "오픈소스", "opensource", "hugging face", "허깅페이스"],
    ),
    (
        TechCategory::ReinforcementLearning,
        &["reinforcement learning", "rl", "rlhf", "강화학습", "보상 모델"],
    ),
    (
        TechCategory::Robotics,
        &["robot", "robotics", "로봇", "로보틱스", "embodied ai"],
    ),
    (
        TechCategory::VoiceAudio,
        &["voice", "audio", "speech", "tts", "stt", "음성", "오디오", "whisper"],
    ),
];

/// Organization keyword table. First match wins, in declaration order.
/// Identity terms only: product names live in the technology table, so a
/// product mention cannot attribute the article to its vendor when several
/// companies appear in the same text.
pub const ORG_KEYWORDS: &[(Organization, &[&str])] = &[
    (
        Organization::OpenAi,
        &["openai", "오픈ai", "sam altman", "샘 올트먼"],
    ),
    (
        Organization::Google,
        &["google", "구글", "deepmind", "딥마인드"],
    ),
    (Organization::Anthropic, &["anthropic", "앤스로픽"]),
    (Organization::Meta, &["meta", "메타", "facebook"]),
    (
        Organization::Microsoft,
        &["microsoft", "마이크로소프트", "azure"],
    ),
    (Organization::Nvidia, &["nvidia", "엔비디아"]),
    (
        Organization::KoreanResearch,
        &[
            "kaist",
            "카이스트",
            "서울대",
            "postech",
            "포스텍",
            "unist",
            "etri",
            "한국전자통신연구원",
        ],
    ),
];

/// High-signal terms that lift an article to the top importance tier.
pub const MAJOR_KEYWORDS: &[&str] = &[
    "release",
    "releases",
    "launch",
    "launches",
    "announce",
    "announces",
    "unveil",
    "unveils",
    "breakthrough",
    "출시",
    "공개",
    "발표",
    "돌파",
];
