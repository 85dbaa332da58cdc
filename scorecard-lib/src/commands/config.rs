use crate::Result;
use crate::render::{DEFAULT_DATE_FORMAT, EscapedField, RenderOptions, is_valid_date_format};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the working directory when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "scorecard.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// strftime format for the `{{ReportDate}}` fallback
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Fields whose values are HTML-escaped before insertion
    #[serde(default)]
    pub escaped_fields: Vec<EscapedField>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit `config_path` must exist. Otherwise `scorecard.toml` in `base_dir` is used
    /// if present, and the built-in defaults if not.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading scorecard configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("no configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading scorecard configuration file '{path}'")),
            }
        };

        log::debug!("loading configuration from '{final_path}'");
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the date format is empty or not a valid strftime format
    pub fn validate(&self) -> Result<()> {
        if self.date_format.is_empty() {
            return Err(app_err!("date_format must not be empty"));
        }

        if !is_valid_date_format(&self.date_format) {
            return Err(app_err!("date_format '{}' is not a valid strftime format", self.date_format));
        }

        Ok(())
    }

    /// The render options this configuration describes
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            date_format: self.date_format.clone(),
            escaping: self.escaped_fields.iter().copied().collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
