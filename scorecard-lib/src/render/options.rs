use super::Escaping;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use core::fmt::Write;

/// Date format used for `{{ReportDate}}` when the report does not carry its own date.
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Knobs that control how a report is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// chrono strftime format for the fallback report date
    pub date_format: String,

    /// Fields to HTML-escape before insertion
    pub escaping: Escaping,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            escaping: Escaping::default(),
        }
    }
}

#[must_use]
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format `now` with `format`, falling back to [`DEFAULT_DATE_FORMAT`] if the format is unusable.
pub(crate) fn format_date(now: DateTime<Local>, format: &str) -> String {
    let mut date = String::new();
    if is_valid_date_format(format) && write!(date, "{}", now.format(format)).is_ok() {
        return date;
    }

    log::warn!("invalid date format '{format}', using '{DEFAULT_DATE_FORMAT}'");
    now.format(DEFAULT_DATE_FORMAT).to_string()
}
