use super::Host;
use super::common::{CommonArgs, read_text};
use crate::Result;
use crate::render::{AssessmentReport, Renderer, unresolved_tokens};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use clap::Parser;
use ohno::{IntoAppError, app_err};
use std::fs;
use std::io::Write;

/// The scorecard template shipped with the tool, used when no `--template` is given
pub const BUNDLED_TEMPLATE: &str = include_str!("../../templates/scorecard.html");

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// JSON file holding the assessment report
    #[arg(long, value_name = "PATH")]
    pub report: Utf8PathBuf,

    /// HTML template to fill (default is the bundled scorecard template)
    #[arg(long, value_name = "PATH")]
    pub template: Option<Utf8PathBuf>,

    /// Write the rendered HTML to this file instead of standard output
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Exit with status code 1 if any `{{...}}` token is left in the rendered output
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Load a report from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid report
pub fn load_report(path: &Utf8Path) -> Result<AssessmentReport> {
    let text = read_text(path, "assessment report")?;
    serde_json::from_str(&text).into_app_err_with(|| format!("parsing assessment report '{path}'"))
}

pub fn render_report<H: Host>(host: &mut H, args: &RenderArgs) -> Result<()> {
    let config = args.common.setup()?;

    let template = match &args.template {
        Some(path) => read_text(path, "template")?,
        None => BUNDLED_TEMPLATE.to_string(),
    };

    let report = load_report(&args.report)?;
    log::info!(
        "rendering report with {} dynamic section(s) and {} Q&A entries",
        report.dynamic_sections.len(),
        report.qa_history.len()
    );

    let html = Renderer::new(config.render_options()).render(&template, &report, Local::now());

    if let Some(path) = &args.output {
        fs::write(path, &html).into_app_err_with(|| format!("writing rendered report to '{path}'"))?;
        let _ = writeln!(host.error(), "Rendered report written to {path}");
    } else {
        host.output().write_all(html.as_bytes()).into_app_err("writing rendered report")?;
    }

    if args.strict {
        let unresolved = unresolved_tokens(&html);
        if !unresolved.is_empty() {
            let list = unresolved.into_iter().collect::<Vec<_>>().join(", ");
            let _ = writeln!(host.error(), "❌ Rendered report contains unresolved tokens: {list}");
            host.exit(1);
            return Err(app_err!("rendered report contains unresolved tokens: {list}"));
        }
    }

    Ok(())
}
