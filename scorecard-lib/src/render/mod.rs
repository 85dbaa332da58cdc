//! Template rendering for assessment scorecards
//!
//! This module turns an HTML template containing `{{Token}}` placeholders and an
//! [`AssessmentReport`] into a finished HTML document.
//!
//! # Implementation Model
//!
//! Every token the renderer understands is described by a [`TokenDef`] in a single static
//! table. Each definition names the report field the value comes from, a resolver that
//! extracts it, and the fallback used when the field is absent or empty. Rendering works in
//! three steps:
//!
//! - All token values are computed once up front from the report, the render options and
//!   an injected clock.
//! - The template is split around `{{#each dynamicSections}} ... {{/each}}` blocks. Each
//!   block is replaced as a unit by one card per dynamic section, and the text between
//!   blocks has its tokens substituted in a single pass. Inserted values are never scanned
//!   again, so report data that happens to contain `{{...}}` stays as written.
//! - The literal `[Client Company Name]` phrase is replaced everywhere in the output.
//!
//! Rendering cannot fail. Tokens the renderer does not recognize are left in place and
//! logged, and [`unresolved_tokens`] reports them to callers that want to treat them as errors.
//!
//! Report values are inserted as raw HTML unless their field is listed in [`Escaping`].
//!
//! [`inspect`] examines a template without rendering it.

mod assessment;
mod dynamic_sections;
mod escaping;
mod inspect;
mod options;
mod qa;
mod renderer;
mod section_key;
mod token_def;

pub use assessment::{Answer, AssessmentReport, DynamicSection, QaEntry, ScoreInformation, UserInformation};
pub use dynamic_sections::render_cards;
pub use escaping::{EscapedField, Escaping, html_escape};
pub use inspect::{TemplateInspection, TokenUsage, inspect};
pub use options::{DEFAULT_DATE_FORMAT, RenderOptions, is_valid_date_format};
pub use qa::{GENERAL_PHASE, NO_RESPONSES, Phase, display_answer, group_by_phase, render_qa_content};
pub use renderer::{CLIENT_COMPANY_PHRASE, Renderer, render, unresolved_tokens};
pub use section_key::SectionKey;
pub use token_def::{COMPANY_NAME_TOKEN, Fallback, RenderScope, TOKEN_DEFINITIONS, TokenDef, find_token};
