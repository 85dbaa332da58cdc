use super::Host;
use super::common::{ColorMode, LogLevel, init_logging, read_text};
use super::render::BUNDLED_TEMPLATE;
use crate::Result;
use crate::render::{TemplateInspection, inspect};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use owo_colors::OwoColorize;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// HTML template to inspect (default is the bundled scorecard template)
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub fn inspect_template<H: Host>(host: &mut H, args: &InspectArgs) -> Result<()> {
    init_logging(args.log_level);

    let template = match &args.template {
        Some(path) => read_text(path, "template")?,
        None => BUNDLED_TEMPLATE.to_string(),
    };

    let inspection = inspect(&template);
    let mut text = String::new();
    describe(&inspection, args.color.enabled(), &mut text)?;

    host.output().write_all(text.as_bytes()).into_app_err("writing template inspection")?;
    Ok(())
}

fn describe<W: core::fmt::Write>(inspection: &TemplateInspection, use_colors: bool, writer: &mut W) -> Result<()> {
    let width = inspection.tokens.iter().map(|usage| usage.name.len()).max().unwrap_or(0);

    writeln!(writer, "Tokens:")?;
    if inspection.tokens.is_empty() {
        writeln!(writer, "  (none)")?;
    }

    for usage in &inspection.tokens {
        let status = if usage.recognized { "recognized" } else { "unrecognized" };
        let status = match (use_colors, usage.recognized) {
            (false, _) => status.to_string(),
            (true, true) => status.green().to_string(),
            (true, false) => status.red().bold().to_string(),
        };
        writeln!(writer, "  {:<width$}  x{:<3} {status}", usage.name, usage.occurrences)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Dynamic section blocks: {}", inspection.dynamic_blocks)?;
    if inspection.unterminated_block {
        let warning = "unterminated {{#each dynamicSections}} block";
        if use_colors {
            writeln!(writer, "  {}", warning.red().bold())?;
        } else {
            writeln!(writer, "  {warning}")?;
        }
    }

    writeln!(writer, "[Client Company Name] phrases: {}", inspection.client_company_phrases)?;
    Ok(())
}
