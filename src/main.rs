use clap::Parser;
use htmlscrub::{Cli, HtmlScrub, HtmlScrubError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create HtmlScrub instance
    let app = match HtmlScrub::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // Execute the cleanup run
    match app.scrub(cli.dry_run) {
        Ok(report) => {
            // Both outcomes terminate normally: either the block was removed
            // or there was nothing to remove
            app.output_formatter().print_scrub_report(&report);
            0
        }
        Err(e) => {
            app.handle_error(&e);

            // Map error types to appropriate exit codes
            match e {
                HtmlScrubError::FileNotFound { .. } => 3,
                HtmlScrubError::InvalidEncoding { .. } => 4,
                HtmlScrubError::Permission { .. } => 7,
                _ => 1, // General error
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "htmlscrub.toml".to_string());

    match HtmlScrub::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  htmlscrub --config {}", config_path);
            println!("\nEdit the file to change the target file or backup behavior.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &HtmlScrubError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlscrub::OutputFormat;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli {
            file: None,
            dry_run: false,
            backup: false,
            backup_suffix: None,
            config: Some(config_path.clone()),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            generate_config: true,
        };

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[target]"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let not_found = HtmlScrubError::FileNotFound {
            path: "x".to_string(),
        };
        let encoding = HtmlScrubError::InvalidEncoding {
            path: "x".to_string(),
        };
        let permission = HtmlScrubError::Permission {
            path: "x".to_string(),
        };

        let code_for = |e: &HtmlScrubError| match e {
            HtmlScrubError::FileNotFound { .. } => 3,
            HtmlScrubError::InvalidEncoding { .. } => 4,
            HtmlScrubError::Permission { .. } => 7,
            _ => 1,
        };

        assert_eq!(code_for(&not_found), 3);
        assert_eq!(code_for(&encoding), 4);
        assert_eq!(code_for(&permission), 7);
    }

    #[test]
    fn test_startup_error_with_bad_config() {
        let cli = Cli {
            file: None,
            dry_run: false,
            backup: false,
            backup_suffix: None,
            config: Some(PathBuf::from("no-such-config.toml")),
            output_format: OutputFormat::Plain,
            verbose: 0,
            quiet: true,
            generate_config: false,
        };

        let result = HtmlScrub::from_cli(&cli);
        assert!(matches!(result, Err(HtmlScrubError::Config { .. })));
    }
}
