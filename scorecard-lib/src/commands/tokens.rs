use super::Host;
use crate::Result;
use crate::render::{TOKEN_DEFINITIONS, TokenDef};
use ohno::IntoAppError;
use std::io::Write;

/// Print every token the renderer understands along with its source field and fallback
pub fn list_tokens<H: Host>(host: &mut H) -> Result<()> {
    let mut text = String::new();
    describe(TOKEN_DEFINITIONS, &mut text)?;
    host.output().write_all(text.as_bytes()).into_app_err("writing token list")?;
    Ok(())
}

fn describe<W: core::fmt::Write>(defs: &[TokenDef], writer: &mut W) -> Result<()> {
    let name_width = defs.iter().map(|def| def.name.len() + 4).max().unwrap_or(0);
    let source_width = defs.iter().map(|def| def.source.len()).max().unwrap_or(0);

    writeln!(writer, "{:<name_width$}  {:<source_width$}  FALLBACK", "TOKEN", "SOURCE")?;
    for def in defs {
        let token = format!("{{{{{}}}}}", def.name);
        writeln!(writer, "{token:<name_width$}  {:<source_width$}  {}", def.source, def.fallback.describe())?;
    }

    Ok(())
}
