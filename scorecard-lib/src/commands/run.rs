//! Command dispatch logic for scorecard

use super::{
    InitArgs, InspectArgs, RenderArgs, ValidateArgs, init_config, inspect_template, list_tokens, render_report,
    validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "scorecard", author, version, long_about = None)]
#[command(about = "Fill HTML scorecard templates with assessment results")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: ScorecardSubcommand,
}

#[derive(Subcommand, Debug)]
enum ScorecardSubcommand {
    /// Render an assessment report into an HTML template
    Render(Box<RenderArgs>),
    /// List the tokens and blocks a template uses
    Inspect(InspectArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
    /// List every token the renderer understands
    Tokens,
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        ScorecardSubcommand::Render(render_args) => render_report(host, render_args),
        ScorecardSubcommand::Inspect(inspect_args) => inspect_template(host, inspect_args),
        ScorecardSubcommand::Init(init_args) => init_config(host, init_args),
        ScorecardSubcommand::Validate(validate_args) => validate_config(host, validate_args),
        ScorecardSubcommand::Tokens => list_tokens(host),
    }
}
