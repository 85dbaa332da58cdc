use super::options::format_date;
use super::{AssessmentReport, EscapedField, RenderOptions, SectionKey, qa};
use chrono::{DateTime, Datelike, Local};

/// Everything a token resolver can see while a report is rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderScope<'a> {
    pub report: &'a AssessmentReport,
    pub options: &'a RenderOptions,
    pub now: DateTime<Local>,
}

/// What a token turns into when its source field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Fixed text, possibly empty
    Text(&'static str),

    /// Today's date in the configured format
    CurrentDate,

    /// This year
    CurrentYear,
}

impl Fallback {
    #[must_use]
    pub fn resolve(self, scope: &RenderScope<'_>) -> String {
        match self {
            Self::Text(text) => text.to_string(),
            Self::CurrentDate => format_date(scope.now, &scope.options.date_format),
            Self::CurrentYear => scope.now.year().to_string(),
        }
    }

    /// Short human-readable description, used when listing tokens.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Text("") => "(empty)",
            Self::Text(text) => text,
            Self::CurrentDate => "(current date)",
            Self::CurrentYear => "(current year)",
        }
    }
}

/// A template token: its name, where its value comes from, and what to insert when that value is missing.
#[derive(Debug)]
pub struct TokenDef {
    /// Name between the braces, e.g. `UserInformation.UserName`
    pub name: &'static str,

    /// The report field the value comes from
    pub source: &'static str,

    /// Field controlling whether a resolved value is escaped. `None` for values the renderer builds itself.
    pub escaped_field: Option<EscapedField>,

    pub resolver: fn(&RenderScope<'_>) -> Option<String>,

    pub fallback: Fallback,
}

impl TokenDef {
    /// The text inserted for this token.
    #[must_use]
    pub fn value(&self, scope: &RenderScope<'_>) -> String {
        match (self.resolver)(scope) {
            Some(value) => match self.escaped_field {
                Some(field) => scope.options.escaping.apply(field, &value).into_owned(),
                None => value,
            },
            None => self.fallback.resolve(scope),
        }
    }
}

macro_rules! token_def {
    ($name:expr, $source:expr, $escaped:expr, $resolver:expr, $fallback:expr) => {
        TokenDef {
            name: $name,
            source: $source,
            escaped_field: $escaped,
            resolver: $resolver,
            fallback: $fallback,
        }
    };
}

macro_rules! section_token_def {
    ($name:expr, $source:expr, $key:ident) => {
        token_def!(
            $name,
            $source,
            Some(EscapedField::for_section(SectionKey::$key)),
            |scope| scope.report.section(SectionKey::$key).map(str::to_owned),
            Fallback::Text("")
        )
    };
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Name of the token whose value also replaces the literal `[Client Company Name]` phrase.
pub const COMPANY_NAME_TOKEN: &str = "UserInformation.CompanyName";

pub const TOKEN_DEFINITIONS: &[TokenDef] = &[
    token_def!(
        "UserInformation.UserName",
        "user.name",
        Some(EscapedField::UserName),
        |scope| non_empty(scope.report.user.name.as_deref()),
        Fallback::Text("Not Provided")
    ),
    token_def!(
        COMPANY_NAME_TOKEN,
        "user.companyName",
        Some(EscapedField::CompanyName),
        |scope| non_empty(scope.report.user.company_name.as_deref()),
        Fallback::Text("Company Not Provided")
    ),
    token_def!(
        "UserInformation.Industry",
        "user.industry",
        Some(EscapedField::Industry),
        |scope| non_empty(scope.report.user.industry.as_deref()),
        Fallback::Text("Industry Not Specified")
    ),
    token_def!(
        "UserInformation.Email",
        "user.email",
        Some(EscapedField::Email),
        |scope| non_empty(scope.report.user.email.as_deref()),
        Fallback::Text("")
    ),
    token_def!(
        "ScoreInformation.AITier",
        "score.tier",
        Some(EscapedField::AiTier),
        |scope| non_empty(scope.report.score.tier.as_deref()),
        Fallback::Text("Not Available")
    ),
    token_def!(
        "ScoreInformation.FinalScore",
        "score.finalScore",
        None,
        |scope| scope.report.score.final_score.map(|score| format!("{score}/100")),
        Fallback::Text("Score Not Available")
    ),
    token_def!(
        "ScoreInformation.ReportID",
        "score.reportId",
        Some(EscapedField::ReportId),
        |scope| non_empty(scope.report.score.report_id.as_deref()),
        Fallback::Text("Report ID Not Available")
    ),
    token_def!(
        "ReportDate",
        "reportDate",
        Some(EscapedField::ReportDate),
        |scope| non_empty(scope.report.report_date.as_deref()),
        Fallback::CurrentDate
    ),
    token_def!(
        "CurrentYear",
        "currentYear",
        None,
        |scope| scope.report.current_year.map(|year| year.to_string()),
        Fallback::CurrentYear
    ),
    token_def!(
        "introText",
        "narrativeIntro",
        Some(EscapedField::IntroText),
        |scope| scope.report.narrative_intro.clone(),
        Fallback::Text("")
    ),
    section_token_def!("sections.overallTier", "namedSections.overallTier", OverallTier),
    section_token_def!("sections.strengths", "namedSections.strengths", Strengths),
    section_token_def!("sections.weaknesses", "namedSections.weaknesses", Weaknesses),
    section_token_def!("sections.strategicPlan", "namedSections.strategicPlan", StrategicPlan),
    section_token_def!("sections.resources", "namedSections.resources", Resources),
    section_token_def!("sections.benchmarks", "namedSections.benchmarks", Benchmarks),
    section_token_def!("sections.learningPath", "namedSections.learningPath", LearningPath),
    token_def!(
        "qaContent",
        "qaHistory",
        None,
        |scope| qa::render_qa_content(&scope.report.qa_history, &scope.options.escaping),
        Fallback::Text(qa::NO_RESPONSES)
    ),
];

/// Look up a token by the name that appears between its braces.
#[must_use]
pub fn find_token(name: &str) -> Option<&'static TokenDef> {
    TOKEN_DEFINITIONS.iter().find(|def| def.name == name)
}
