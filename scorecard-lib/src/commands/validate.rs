use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::{CONFIG_FILE_NAME, Config};
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `scorecard.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    init_logging(args.log_level);

    let base_dir = Utf8Path::new(".");
    let config_path = args.config.as_ref();

    match Config::load(base_dir, config_path) {
        Ok(config) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else if base_dir.join(CONFIG_FILE_NAME).exists() {
                let _ = writeln!(host.output(), "Config file: {CONFIG_FILE_NAME}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }

            let _ = writeln!(host.output(), "Date format: {}", config.date_format);
            let fields: Vec<String> = config.render_options().escaping.fields().map(|field| field.to_string()).collect();
            if !fields.is_empty() {
                let _ = writeln!(host.output(), "Escaped fields: {}", fields.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::init::{InitArgs, init_config};

    fn validate(path: Utf8PathBuf) -> (TestHost, Result<()>) {
        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(path),
            log_level: LogLevel::None,
        };
        let result = validate_config(&mut host, &args);
        (host, result)
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_default_config_is_valid() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("scorecard.toml")).unwrap();

        let mut init_host = TestHost::new();
        let init_args = InitArgs {
            output: Some(config_path.clone()),
            force: false,
        };
        init_config(&mut init_host, &init_args).expect("init_config should succeed");

        let (host, result) = validate(config_path);
        assert!(result.is_ok(), "Default configuration should validate successfully: {result:?}");
        assert!(host.output_str().contains("Configuration file is valid"));
        assert_eq!(host.exit_code, None);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_escaped_fields_are_listed() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("scorecard.toml")).unwrap();
        std::fs::write(
            &config_path,
            "escaped_fields = [\"qaHistory.answer\", \"introText\", \"qaHistory.answer\"]\n",
        )
        .unwrap();

        let (host, result) = validate(config_path);
        result.unwrap();
        assert!(host.output_str().contains("Escaped fields: introText, qaHistory.answer\n"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_config_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("scorecard.toml")).unwrap();
        std::fs::write(&config_path, "date_format = \"%Q\"\n").unwrap();

        let (host, result) = validate(config_path);
        assert!(result.is_err());
        assert!(host.error_str().contains("❌ Configuration validation failed"));
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_missing_config_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("nope.toml")).unwrap();

        let (host, result) = validate(config_path);
        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
    }
}
