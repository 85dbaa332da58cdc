use super::{DynamicSection, EscapedField, Escaping};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a complete `{{#each dynamicSections}} ... {{/each}}` span, delimiters included.
pub(crate) static EACH_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*#each\s+dynamicSections\s*\}\}(?s:.*?)\{\{\s*/each\s*\}\}").expect("invalid regex"));

/// Matches the opening helper on its own, used to spot blocks that are never closed.
pub(crate) static EACH_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*#each\s+dynamicSections\s*\}\}").expect("invalid regex"));

/// Render the cards that replace a dynamic sections block, one per section in input order.
///
/// No sections means an empty string, which removes the block from the output entirely.
#[must_use]
pub fn render_cards(sections: &[DynamicSection], escaping: &Escaping) -> String {
    sections.iter().map(|section| card(section, escaping)).collect()
}

fn card(section: &DynamicSection, escaping: &Escaping) -> String {
    format!(
        concat!(
            "<div class=\"report-section dynamic-section\">\n",
            "  <div class=\"section-sidebar\">\n",
            "    <h2 class=\"section-title\">{}</h2>\n",
            "  </div>\n",
            "  <div class=\"section-content\">\n",
            "    {}\n",
            "  </div>\n",
            "</div>\n",
        ),
        escaping.apply(EscapedField::DynamicSectionTitle, &section.title),
        escaping.apply(EscapedField::DynamicSectionContent, &section.content)
    )
}
