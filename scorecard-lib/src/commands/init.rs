use super::Host;
use super::config::{CONFIG_FILE_NAME, Config};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::app_err;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path (default is `scorecard.toml` in the current directory)
    #[arg(value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE_NAME));

    if output.exists() && !args.force {
        return Err(app_err!("'{output}' already exists, use --force to overwrite it"));
    }

    Config::save_default(&output)?;
    let _ = writeln!(host.output(), "Generated default configuration file: {output}");
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_init_writes_default_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("scorecard.toml")).unwrap();

        let mut host = TestHost::new();
        init_config(
            &mut host,
            &InitArgs {
                output: Some(path.clone()),
                force: false,
            },
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), super::super::config::DEFAULT_CONFIG_TOML);
        assert!(host.output_str().contains("Generated default configuration file"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_init_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("scorecard.toml")).unwrap();
        std::fs::write(&path, "date_format = \"%Y\"\n").unwrap();

        let mut host = TestHost::new();
        let mut args = InitArgs {
            output: Some(path.clone()),
            force: false,
        };
        assert!(init_config(&mut host, &args).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "date_format = \"%Y\"\n");

        args.force = true;
        init_config(&mut host, &args).unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "date_format = \"%Y\"\n");
    }
}
