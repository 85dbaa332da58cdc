use super::dynamic_sections::{self, EACH_BLOCK_REGEX};
use super::token_def::{COMPANY_NAME_TOKEN, RenderScope, TOKEN_DEFINITIONS};
use super::{AssessmentReport, RenderOptions};
use chrono::{DateTime, Local};
use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Copy text that templates use in place of the company name, outside the token syntax.
pub const CLIENT_COMPANY_PHRASE: &str = "[Client Company Name]";

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_.]*)\}\}").expect("invalid regex"));

static LEFTOVER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{[^{}]*\}\}").expect("invalid regex"));

/// Render `template` with `report` using default options and the local clock.
#[must_use]
pub fn render(template: &str, report: &AssessmentReport) -> String {
    Renderer::default().render(template, report, Local::now())
}

/// Turns an HTML template and an [`AssessmentReport`] into a finished HTML document.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a report, using `now` for any date or year the report does not supply.
    ///
    /// Rendering never fails. Missing report data turns into fallback text, and tokens the
    /// renderer does not know are left in place and logged.
    #[must_use]
    pub fn render(&self, template: &str, report: &AssessmentReport, now: DateTime<Local>) -> String {
        let scope = RenderScope {
            report,
            options: &self.options,
            now,
        };

        let values: HashMap<&'static str, String> = TOKEN_DEFINITIONS.iter().map(|def| (def.name, def.value(&scope))).collect();
        log::trace!("resolved {} token values", values.len());
        let cards = dynamic_sections::render_cards(&report.dynamic_sections, &self.options.escaping);

        let mut html = String::with_capacity(template.len() + cards.len());
        for (index, piece) in EACH_BLOCK_REGEX.split(template).enumerate() {
            if index > 0 {
                html.push_str(&cards);
            }
            html.push_str(&substitute_tokens(piece, &values));
        }

        if let Some(company) = values.get(COMPANY_NAME_TOKEN) {
            html = html.replace(CLIENT_COMPANY_PHRASE, company);
        }

        let unresolved = unresolved_tokens(&html);
        if unresolved.is_empty() {
            log::debug!("rendered {} bytes with all tokens resolved", html.len());
        } else {
            for token in &unresolved {
                log::warn!("template token {token} was left unresolved");
            }
        }

        html
    }
}

fn substitute_tokens(text: &str, values: &HashMap<&'static str, String>) -> String {
    TOKEN_REGEX
        .replace_all(text, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct `{{...}}` tokens left in rendered output, in sorted order.
#[must_use]
pub fn unresolved_tokens(html: &str) -> BTreeSet<&str> {
    LEFTOVER_REGEX.find_iter(html).map(|m| m.as_str()).collect()
}
