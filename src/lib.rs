pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, TargetConfig, WriteConfig};
pub use error::{HtmlScrubError, Result, UserFriendlyError};

// Core functionality re-exports
pub use cleaner::{FallbackRule, ScrubOutcome, ScrubReport, Scrubber};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface: one configured cleanup run against one file.
pub struct HtmlScrub {
    config: Config,
    output_formatter: OutputFormatter,
}

impl HtmlScrub {
    /// Create a new HtmlScrub instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Ok(Self {
            config,
            output_formatter,
        })
    }

    /// Create HtmlScrub instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(config, output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Run the cleanup against the configured target file. The file is only
    /// written when the fallback block was found; a no-match run leaves it
    /// untouched and is reported as such, not as an error.
    pub fn scrub(&self, dry_run: bool) -> Result<ScrubReport> {
        let target = &self.config.target.file;

        self.output_formatter
            .start_operation(&format!("Cleaning {}", target.display()));

        let scrubber = Scrubber::new()?
            .with_backup(self.config.write.backup)
            .with_backup_suffix(self.config.write.backup_suffix.clone())
            .with_dry_run(dry_run);

        let report = scrubber.scrub_file(target)?;
        self.output_formatter
            .describe_target(&report.file, report.bytes_before);

        Ok(report)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(HtmlScrubError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &HtmlScrubError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to clean a single file with minimal setup
pub fn scrub_simple(path: &Path, dry_run: bool) -> Result<ScrubReport> {
    let mut config = Config::default();
    config.target.file = path.to_path_buf();

    let app = HtmlScrub::new(config, OutputMode::Plain, 0, true)?;
    app.scrub(dry_run)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_htmlscrub_creation() {
        let config = Config::default();
        let app = HtmlScrub::new(config, OutputMode::Human, 1, false);
        assert!(app.is_ok());

        let app = app.unwrap();
        assert_eq!(
            app.config().target.file,
            PathBuf::from("bwa-upload-working.html")
        );
    }

    #[test]
    fn test_scrub_missing_target() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.target.file = temp_dir.path().join("missing.html");

        let app = HtmlScrub::new(config, OutputMode::Plain, 0, true).unwrap();
        let error = app.scrub(false).unwrap_err();
        assert!(matches!(error, HtmlScrubError::FileNotFound { .. }));
    }

    #[test]
    fn test_scrub_simple_no_match() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("clean.html");
        std::fs::write(&target, "<html>nothing here</html>").unwrap();

        let report = scrub_simple(&target, false).unwrap();
        assert!(!report.changed);
        assert_eq!(report.chars_removed, 0);
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        let result = HtmlScrub::generate_sample_config(&config_path);
        assert!(result.is_ok());
        assert!(config_path.exists());

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[target]"));
        assert!(content.contains("[write]"));
    }

    #[test]
    fn test_version_info() {
        let version = version_info();
        assert!(!version.is_empty());
    }
}
