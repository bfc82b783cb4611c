use crate::analyzer::NewsAnalyzer;
use crate::keywords::{MAJOR_KEYWORDS, ORG_KEYWORDS, TECH_KEYWORDS};
use crate::types::{
    ClassifiedItem, Importance, NewsAnalysis, NewsItem, Organization, TechCategory,
};
use crate::utils::truncate_chars;
use tracing::warn;

const SUMMARY_CHARS: usize = 200;
const MAX_KEYWORD_TECHNOLOGIES: usize = 3;

/// Turns fetched articles into classified ones. With an analyzer configured
/// it delegates and falls back to keyword matching when the call fails, so
/// classification itself never drops an article.
pub struct Classifier {
    analyzer: Option<Box<dyn NewsAnalyzer>>,
}

impl Classifier {
    pub fn keyword_only() -> Self {
        Self { analyzer: None }
    }

    pub fn with_analyzer(analyzer: Box<dyn NewsAnalyzer>) -> Self {
        Self {
            analyzer: Some(analyzer),
        }
    }

    pub async fn classify(&self, item: NewsItem) -> ClassifiedItem {
        let analysis = match &self.analyzer {
            Some(analyzer) => match analyzer.analyze(&item.title, &item.content).await {
                Ok(analysis) => analysis,
                Err(e) => {
                    warn!(
                        "{} analysis failed for {} ({}), falling back to keywords",
                        analyzer.name(),
                        item.url,
                        e
                    );
                    keyword_classify(&item.title, &item.content)
                }
            },
            None => keyword_classify(&item.title, &item.content),
        };

        ClassifiedItem { item, analysis }
    }
}

/// Keyword classification over the lowercased title and body. Tables are
/// scanned in declaration order, so the result is deterministic for a given
/// input text.
pub fn keyword_classify(title: &str, content: &str) -> NewsAnalysis {
    let text = format!("{} {}", title, content).to_lowercase();

    let mut technologies: Vec<TechCategory> = TECH_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(category, _)| *category)
        .collect();
    technologies.truncate(MAX_KEYWORD_TECHNOLOGIES);

    let organization = ORG_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(org, _)| *org)
        .unwrap_or(Organization::Other);

    let matched_any = !technologies.is_empty() || organization != Organization::Other;

    let importance = if MAJOR_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Importance::Major
    } else if matched_any {
        Importance::Normal
    } else {
        Importance::Reference
    };

    // Everything this collector sees is AI news, so an article with no
    // keyword hits still gets the broadest tag.
    if technologies.is_empty() {
        technologies.push(TechCategory::Llm);
    }

    let summary = if content.trim().is_empty() {
        title.to_string()
    } else {
        truncate_chars(content.trim(), SUMMARY_CHARS)
    };

    NewsAnalysis {
        summary,
        key_points: Vec::new(),
        technologies,
        organization,
        importance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_deterministic() {
        let title = "New multimodal agent framework announced";
        let body = "The open source release supports vision and audio input.";

        let first = keyword_classify(title, body);
        for _ in 0..5 {
            let again = keyword_classify(title, body);
            assert_eq!(again.technologies, first.technologies);
            assert_eq!(again.organization, first.organization);
            assert_eq!(again.importance, first.importance);
        }
    }

    #[test]
    fn gpt4_and_google_tags_llm_and_google() {
        let analysis = keyword_classify(
            "Benchmark roundup",
            "The study compares GPT-4 against Google's latest models.",
        );

        assert!(analysis.technologies.contains(&TechCategory::Llm));
        assert_eq!(analysis.organization, Organization::Google);
    }

    #[test]
    fn organization_first_match_wins_in_table_order() {
        // Both OpenAI and Google appear; OpenAI sits earlier in the table
        let analysis = keyword_classify("OpenAI and Google clash over AI safety", "");
        assert_eq!(analysis.organization, Organization::OpenAi);
    }

    #[test]
    fn unmatched_organization_falls_back_to_other() {
        let analysis = keyword_classify("Tiny startup ships LLM tooling", "");
        assert_eq!(analysis.organization, Organization::Other);
    }

    #[test]
    fn default_technology_is_llm() {
        // Fixture text dodges the short patterns ("rl" hides in words like
        // "quarterly"), so no table entry matches
        let analysis = keyword_classify("Funding news digest", "Nothing new today.");
        assert_eq!(analysis.technologies, vec![TechCategory::Llm]);
    }

    #[test]
    fn technologies_are_capped_at_three() {
        let analysis = keyword_classify(
            "Everything at once",
            "An agent with multimodal vision, reasoning, reinforcement learning, \
             robotics and voice output built on a large language model.",
        );
        assert_eq!(analysis.technologies.len(), 3);
        // Table order decides which three survive
        assert_eq!(
            analysis.technologies,
            vec![
                TechCategory::Llm,
                TechCategory::Reasoning,
                TechCategory::Agent
            ]
        );
    }

    #[test]
    fn importance_tiers() {
        let major = keyword_classify("OpenAI releases new reasoning model", "");
        assert_eq!(major.importance, Importance::Major);

        let normal = keyword_classify("A quiet update to Claude documentation", "");
        assert_eq!(normal.importance, Importance::Normal);

        let reference = keyword_classify("Industry opinion piece", "No named vendors.");
        assert_eq!(reference.importance, Importance::Reference);
    }

    #[test]
    fn keyword_summary_truncates_body() {
        let body = "문장 ".repeat(200);
        let analysis = keyword_classify("제목", &body);
        assert_eq!(analysis.summary.chars().count(), SUMMARY_CHARS);
        assert!(analysis.key_points.is_empty());
    }

    #[test]
    fn keyword_summary_uses_title_when_body_is_empty() {
        let analysis = keyword_classify("제목만 있는 기사", "   ");
        assert_eq!(analysis.summary, "제목만 있는 기사");
    }
}
