//! Command-line interface and orchestration for scorecard
//!
//! This module implements the CLI commands that drive the renderer. It handles
//! argument parsing, configuration management and reading and writing files.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **render**: Load a JSON assessment report, fill a template with it, and write the
//!   resulting HTML to a file or standard output
//! - **inspect**: List the tokens, dynamic section blocks and company phrases a template uses
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//! - **tokens**: Print the token registry with sources and fallbacks
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. All output goes through the [`Host`] trait
//! so commands can be exercised in-process by tests.
//!
//! Configuration lives in a TOML file (`scorecard.toml`) that sets the fallback
//! date format and the fields to HTML-escape.

mod common;
mod config;
mod host;
mod init;
mod inspect;
mod render;
mod run;
mod tokens;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use inspect::{InspectArgs, inspect_template};
pub use render::{BUNDLED_TEMPLATE, RenderArgs, load_report, render_report};
pub use run::run;
pub use tokens::list_tokens;
pub use validate::{ValidateArgs, validate_config};
