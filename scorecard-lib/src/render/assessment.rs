use super::SectionKey;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// The data behind one scorecard, as handed to the renderer.
///
/// Every field is optional on the wire. A missing field, or one explicitly set to `null`,
/// deserializes to its default so that rendering can always fall back to fixed text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentReport {
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserInformation,

    #[serde(deserialize_with = "null_as_default")]
    pub score: ScoreInformation,

    /// Pre-formatted report date
    pub report_date: Option<String>,

    pub current_year: Option<i32>,

    /// Free text or HTML placed in the report introduction
    pub narrative_intro: Option<String>,

    /// HTML fragments keyed by [`SectionKey`] names
    #[serde(alias = "sections", deserialize_with = "null_as_default")]
    pub named_sections: BTreeMap<String, Option<String>>,

    #[serde(deserialize_with = "null_as_default")]
    pub dynamic_sections: Vec<DynamicSection>,

    #[serde(deserialize_with = "null_as_default")]
    pub qa_history: Vec<QaEntry>,
}

impl AssessmentReport {
    /// The HTML fragment for one of the fixed named sections, if present.
    #[must_use]
    pub fn section(&self, key: SectionKey) -> Option<&str> {
        let name: &'static str = key.into();
        self.named_sections.get(name).and_then(Option::as_deref)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInformation {
    pub industry: Option<String>,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreInformation {
    pub tier: Option<String>,
    pub final_score: Option<f64>,
    pub report_id: Option<String>,
}

/// An extra report section outside the fixed named set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DynamicSection {
    pub title: String,
    pub content: String,
}

impl DynamicSection {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// One answered assessment question.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QaEntry {
    pub question: String,
    pub answer: Answer,
    pub phase_name: Option<String>,
    pub reasoning_text: Option<String>,
    pub answer_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    pub index: Option<u64>,
    pub answer_source: Option<String>,
}

impl QaEntry {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Answer::Text(answer.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase_name = Some(phase.into());
        self
    }

    #[must_use]
    pub fn with_answer_type(mut self, answer_type: impl Into<String>) -> Self {
        self.answer_type = Some(answer_type.into());
        self
    }

    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning_text = Some(reasoning.into());
        self
    }

    /// The phase this entry is grouped under, if it names a non-empty one.
    #[must_use]
    pub fn phase(&self) -> Option<&str> {
        self.phase_name.as_deref().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn is_checkbox(&self) -> bool {
        self.answer_type.as_deref() == Some("checkbox")
    }
}

/// The raw answer as stored by the assessment front end.
///
/// Most answers are plain strings, but multi-select questions may have stored a list,
/// and a handful of numeric and yes/no questions stored bare JSON scalars. Anything else
/// is kept as raw JSON so one odd entry cannot fail the whole report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    #[default]
    Missing,
    Text(String),
    Choices(Vec<String>),
    Number(serde_json::Number),
    Flag(bool),
    Other(Value),
}

impl Answer {
    /// The answer in the plain form it takes when inserted unchanged.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Text(text) => text.clone(),
            Self::Choices(choices) => choices.join(","),
            Self::Number(number) => format_number(number),
            Self::Flag(flag) => flag.to_string(),
            Self::Other(value) => value_to_plain_text(value),
        }
    }
}

// Integral floats print without a trailing `.0`, so `72.0` reads as `72`
fn format_number(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() => value.to_string(),
        _ => number.to_string(),
    }
}

/// Lists join their elements with `,`, nulls are empty, and objects keep their JSON text.
fn value_to_plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => format_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(value_to_plain_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
