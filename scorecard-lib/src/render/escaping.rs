use super::SectionKey;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A report field whose value can be HTML-escaped before it is inserted.
///
/// Scalar fields are named after the template token that inserts them. Fields that only
/// appear inside generated markup (dynamic sections and Q&A entries) use a `collection.field`
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr, Display, Deserialize)]
#[serde(try_from = "String")]
pub enum EscapedField {
    #[strum(serialize = "UserInformation.UserName")]
    UserName,
    #[strum(serialize = "UserInformation.CompanyName")]
    CompanyName,
    #[strum(serialize = "UserInformation.Industry")]
    Industry,
    #[strum(serialize = "UserInformation.Email")]
    Email,
    #[strum(serialize = "ScoreInformation.AITier")]
    AiTier,
    #[strum(serialize = "ScoreInformation.ReportID")]
    ReportId,
    #[strum(serialize = "ReportDate")]
    ReportDate,
    #[strum(serialize = "introText")]
    IntroText,
    #[strum(serialize = "sections.overallTier")]
    OverallTierSection,
    #[strum(serialize = "sections.strengths")]
    StrengthsSection,
    #[strum(serialize = "sections.weaknesses")]
    WeaknessesSection,
    #[strum(serialize = "sections.strategicPlan")]
    StrategicPlanSection,
    #[strum(serialize = "sections.resources")]
    ResourcesSection,
    #[strum(serialize = "sections.benchmarks")]
    BenchmarksSection,
    #[strum(serialize = "sections.learningPath")]
    LearningPathSection,
    #[strum(serialize = "dynamicSections.title")]
    DynamicSectionTitle,
    #[strum(serialize = "dynamicSections.content")]
    DynamicSectionContent,
    #[strum(serialize = "qaHistory.phaseName")]
    QaPhaseName,
    #[strum(serialize = "qaHistory.question")]
    QaQuestion,
    #[strum(serialize = "qaHistory.answer")]
    QaAnswer,
    #[strum(serialize = "qaHistory.reasoningText")]
    QaReasoningText,
}

impl EscapedField {
    #[must_use]
    pub const fn for_section(key: SectionKey) -> Self {
        match key {
            SectionKey::OverallTier => Self::OverallTierSection,
            SectionKey::Strengths => Self::StrengthsSection,
            SectionKey::Weaknesses => Self::WeaknessesSection,
            SectionKey::StrategicPlan => Self::StrategicPlanSection,
            SectionKey::Resources => Self::ResourcesSection,
            SectionKey::Benchmarks => Self::BenchmarksSection,
            SectionKey::LearningPath => Self::LearningPathSection,
        }
    }
}

impl TryFrom<String> for EscapedField {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::iter().find(|field| <&'static str>::from(*field) == value).ok_or_else(|| {
            let known: Vec<&'static str> = Self::iter().map(Into::into).collect();
            format!("unknown field '{value}', expected one of: {}", known.join(", "))
        })
    }
}

/// The set of fields that get HTML-escaped during rendering.
///
/// The default set is empty: every value is inserted as raw HTML, which is what existing
/// templates and stored narrative content rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Escaping {
    fields: BTreeSet<EscapedField>,
}

impl Escaping {
    /// Insert every field as raw HTML.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Escape every field.
    #[must_use]
    pub fn all() -> Self {
        EscapedField::iter().collect()
    }

    #[must_use]
    pub fn with(mut self, field: EscapedField) -> Self {
        let _ = self.fields.insert(field);
        self
    }

    #[must_use]
    pub fn contains(&self, field: EscapedField) -> bool {
        self.fields.contains(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = EscapedField> + '_ {
        self.fields.iter().copied()
    }

    /// Prepare a field value for insertion, escaping it only if the field is in the set.
    #[must_use]
    pub fn apply<'a>(&self, field: EscapedField, value: &'a str) -> Cow<'a, str> {
        if self.contains(field) {
            Cow::Owned(html_escape(value))
        } else {
            Cow::Borrowed(value)
        }
    }
}

impl FromIterator<EscapedField> for Escaping {
    fn from_iter<I: IntoIterator<Item = EscapedField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
