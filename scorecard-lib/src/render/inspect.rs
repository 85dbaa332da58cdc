use super::dynamic_sections::{EACH_BLOCK_REGEX, EACH_OPEN_REGEX};
use super::renderer::CLIENT_COMPANY_PHRASE;
use super::token_def::find_token;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("invalid regex"));

/// How often a placeholder appears in a template, and whether the renderer will fill it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenUsage {
    /// Text between the braces, exactly as written
    pub name: String,
    pub occurrences: usize,
    pub recognized: bool,
}

/// What a template asks of the renderer, found without rendering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateInspection {
    /// Placeholders outside dynamic section blocks, sorted by name
    pub tokens: Vec<TokenUsage>,

    /// Complete `{{#each dynamicSections}} ... {{/each}}` blocks
    pub dynamic_blocks: usize,

    /// Whether an opening `{{#each dynamicSections}}` is never closed
    pub unterminated_block: bool,

    /// Occurrences of the literal `[Client Company Name]` phrase
    pub client_company_phrases: usize,
}

impl TemplateInspection {
    /// Placeholders that would survive rendering unchanged.
    pub fn unrecognized(&self) -> impl Iterator<Item = &TokenUsage> {
        self.tokens.iter().filter(|usage| !usage.recognized)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.unterminated_block && self.unrecognized().next().is_none()
    }
}

/// Scan a template for placeholders, dynamic blocks and the company phrase.
///
/// Text inside complete dynamic blocks is ignored, since the renderer replaces those blocks wholesale.
#[must_use]
pub fn inspect(template: &str) -> TemplateInspection {
    let dynamic_blocks = EACH_BLOCK_REGEX.find_iter(template).count();
    let outside_blocks = EACH_BLOCK_REGEX.replace_all(template, "");

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(&outside_blocks) {
        if let Some(name) = caps.get(1) {
            *counts.entry(name.as_str()).or_default() += 1;
        }
    }

    let tokens = counts
        .into_iter()
        .map(|(name, occurrences)| TokenUsage {
            name: name.to_string(),
            occurrences,
            recognized: find_token(name).is_some(),
        })
        .collect();

    TemplateInspection {
        tokens,
        dynamic_blocks,
        unterminated_block: EACH_OPEN_REGEX.is_match(&outside_blocks),
        client_company_phrases: template.matches(CLIENT_COMPANY_PHRASE).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(inspection: &TemplateInspection, name: &str) -> TokenUsage {
        inspection.tokens.iter().find(|u| u.name == name).cloned().unwrap()
    }

    #[test]
    fn test_counts_tokens() {
        let inspection = inspect("{{UserInformation.UserName}} {{UserInformation.UserName}} {{CurrentYear}}");

        assert_eq!(inspection.tokens.len(), 2);
        assert_eq!(usage(&inspection, "UserInformation.UserName").occurrences, 2);
        assert!(usage(&inspection, "CurrentYear").recognized);
        assert!(inspection.is_clean());
    }

    #[test]
    fn test_unknown_tokens_are_flagged() {
        let inspection = inspect("{{Mystery}} {{ CurrentYear }}");

        assert!(!usage(&inspection, "Mystery").recognized);
        assert!(!usage(&inspection, " CurrentYear ").recognized);
        assert_eq!(inspection.unrecognized().count(), 2);
        assert!(!inspection.is_clean());
    }

    #[test]
    fn test_block_contents_are_skipped() {
        let inspection = inspect("{{#each dynamicSections}}<h2>{{title}}</h2>{{/each}}{{qaContent}}");

        assert_eq!(inspection.dynamic_blocks, 1);
        assert!(!inspection.unterminated_block);
        assert_eq!(inspection.tokens.len(), 1);
        assert_eq!(inspection.tokens[0].name, "qaContent");
    }

    #[test]
    fn test_unterminated_block() {
        let inspection = inspect("{{#each dynamicSections}}<h2>{{title}}</h2>");

        assert_eq!(inspection.dynamic_blocks, 0);
        assert!(inspection.unterminated_block);
        assert!(!inspection.is_clean());
    }

    #[test]
    fn test_company_phrase() {
        let inspection = inspect("[Client Company Name] and [Client Company Name]");
        assert_eq!(inspection.client_company_phrases, 2);
        assert!(inspection.tokens.is_empty());
    }
}
