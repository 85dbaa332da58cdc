//! Assembly of the `{{qaContent}}` block from the assessment's question/answer history.

use super::{Answer, EscapedField, Escaping, QaEntry};
use std::collections::HashMap;

/// Group label for entries that carry no phase name.
pub const GENERAL_PHASE: &str = "General";

/// Inserted in place of the Q&A block when there is no history to show.
pub const NO_RESPONSES: &str = "<p>No assessment responses available.</p>";

const CHECKBOX_DELIMITERS: [char; 3] = ['|', ',', ';'];

/// All the entries that share a phase, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase<'a> {
    pub name: &'a str,
    pub entries: Vec<&'a QaEntry>,
}

/// Group entries by phase, keeping phases in first-seen order.
#[must_use]
pub fn group_by_phase(history: &[QaEntry]) -> Vec<Phase<'_>> {
    let mut phases: Vec<Phase<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in history {
        let name = entry.phase().unwrap_or(GENERAL_PHASE);
        let position = *positions.entry(name).or_insert_with(|| {
            phases.push(Phase { name, entries: Vec::new() });
            phases.len() - 1
        });
        phases[position].entries.push(entry);
    }

    phases
}

/// The answer as shown in the report.
///
/// Checkbox answers stored as a delimited string become a bullet list when they hold more
/// than one choice. Everything else is shown as stored.
#[must_use]
pub fn display_answer(entry: &QaEntry, escaping: &Escaping) -> String {
    if entry.is_checkbox()
        && let Answer::Text(text) = &entry.answer
    {
        let choices: Vec<&str> = text.split(CHECKBOX_DELIMITERS).map(str::trim).filter(|s| !s.is_empty()).collect();
        if choices.len() > 1 {
            return choices
                .iter()
                .map(|choice| format!("• {}", escaping.apply(EscapedField::QaAnswer, choice)))
                .collect::<Vec<_>>()
                .join("<br>");
        }
    }

    escaping.apply(EscapedField::QaAnswer, &entry.answer.to_plain_text()).into_owned()
}

/// Render the whole Q&A block, or `None` when there is no history.
#[must_use]
pub fn render_qa_content(history: &[QaEntry], escaping: &Escaping) -> Option<String> {
    if history.is_empty() {
        return None;
    }

    let phases = group_by_phase(history);
    log::debug!("rendering {} Q&A entries in {} phase(s)", history.len(), phases.len());

    Some(phases.iter().map(|phase| phase_block(phase, escaping)).collect())
}

fn phase_block(phase: &Phase<'_>, escaping: &Escaping) -> String {
    let entries: String = phase.entries.iter().map(|entry| entry_block(entry, escaping)).collect();

    format!(
        concat!("<div class=\"qa-phase\">\n", "  <h3 class=\"qa-phase-title\">{}</h3>\n", "{}", "</div>\n"),
        escaping.apply(EscapedField::QaPhaseName, phase.name),
        entries
    )
}

fn entry_block(entry: &QaEntry, escaping: &Escaping) -> String {
    let analysis = entry
        .reasoning_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|reasoning| {
            format!(
                "    <p class=\"qa-analysis\"><strong>Analysis:</strong> {}</p>\n",
                escaping.apply(EscapedField::QaReasoningText, reasoning)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            "  <div class=\"qa-item\">\n",
            "    <p class=\"qa-question\"><strong>Q:</strong> {}</p>\n",
            "    <p class=\"qa-answer\"><strong>A:</strong> {}</p>\n",
            "{}",
            "  </div>\n",
        ),
        escaping.apply(EscapedField::QaQuestion, &entry.question),
        display_answer(entry, escaping),
        analysis
    )
}
