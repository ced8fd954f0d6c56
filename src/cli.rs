use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "htmlscrub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Remove the dead fallback estimation block from an HTML report")]
#[command(
    long_about = "HtmlScrub rewrites one HTML file in place, replacing the hard-coded \
                       fallback/estimation block in its inline script with a completion \
                       log statement. Running it against an already cleaned file is a no-op."
)]
#[command(after_help = "EXAMPLES:\n  \
    htmlscrub\n  \
    htmlscrub path/to/bwa-upload-working.html --backup\n  \
    htmlscrub --dry-run --verbose\n  \
    htmlscrub --output-format json --quiet")]
pub struct Cli {
    /// HTML file to clean (defaults to the configured target)
    pub file: Option<PathBuf>,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Keep a copy of the original file before overwriting
    #[arg(short, long)]
    pub backup: bool,

    /// Suffix appended to the backup file name
    #[arg(long, value_name = "SUFFIX")]
    pub backup_suffix: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_file(self.file.clone())
            .with_backup(self.backup.then_some(true))
            .with_backup_suffix(self.backup_suffix.clone())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_defaults() -> Cli {
        Cli {
            file: None,
            dry_run: false,
            backup: false,
            backup_suffix: None,
            config: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            generate_config: false,
        }
    }

    #[test]
    fn test_overrides_empty_by_default() {
        let overrides = cli_with_defaults().create_cli_overrides();
        assert!(overrides.file.is_none());
        assert!(overrides.backup.is_none());
        assert!(overrides.backup_suffix.is_none());
    }

    #[test]
    fn test_backup_flag_becomes_override() {
        let mut cli = cli_with_defaults();
        cli.backup = true;
        cli.backup_suffix = Some(".orig".to_string());

        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.backup, Some(true));
        assert_eq!(overrides.backup_suffix.as_deref(), Some(".orig"));
    }

    #[test]
    fn test_load_config_applies_file_override() {
        let mut cli = cli_with_defaults();
        cli.file = Some(PathBuf::from("custom.html"));

        let config = cli.load_config().unwrap();
        assert_eq!(config.target.file, PathBuf::from("custom.html"));
    }

    #[test]
    fn test_verbosity_level() {
        let mut cli = cli_with_defaults();
        cli.verbose = 2;
        assert_eq!(cli.verbosity_level(), 2);
        assert!(cli.is_verbose());

        cli.verbose = 0;
        cli.quiet = true;
        assert_eq!(cli.verbosity_level(), 0);
        assert!(!cli.is_verbose());
    }
}
