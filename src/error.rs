use thiserror::Error;

#[derive(Error, Debug)]
pub enum HtmlScrubError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Target file not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    Permission { path: String },

    #[error("Target file is not valid UTF-8 text: {path}")]
    InvalidEncoding { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Pattern error: {message}")]
    Pattern { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for HtmlScrubError {
    fn user_message(&self) -> String {
        match self {
            HtmlScrubError::FileNotFound { path } => {
                format!("Target file not found: {}", path)
            }
            HtmlScrubError::Permission { path } => {
                format!("Permission denied accessing: {}", path)
            }
            HtmlScrubError::InvalidEncoding { path } => {
                format!("File is not valid UTF-8 text: {}", path)
            }
            HtmlScrubError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            HtmlScrubError::Pattern { message } => {
                format!("Pattern error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            HtmlScrubError::FileNotFound { .. } => Some(
                "Check the file path, or run from the directory containing the report. The default target can be changed in htmlscrub.toml.".to_string()
            ),
            HtmlScrubError::Permission { .. } => Some(
                "Ensure you have read and write permissions for the target file and its directory.".to_string()
            ),
            HtmlScrubError::InvalidEncoding { .. } => Some(
                "The tool only operates on UTF-8 encoded HTML files. Convert the file to UTF-8 before cleaning it.".to_string()
            ),
            HtmlScrubError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for HtmlScrubError {
    fn from(error: toml::de::Error) -> Self {
        HtmlScrubError::Config {
            message: error.to_string(),
        }
    }
}

impl From<regex::Error> for HtmlScrubError {
    fn from(error: regex::Error) -> Self {
        HtmlScrubError::Pattern {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HtmlScrubError>;
