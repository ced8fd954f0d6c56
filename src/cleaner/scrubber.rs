use crate::cleaner::FallbackRule;
use crate::error::{HtmlScrubError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of applying the cleanup rule to in-memory text.
#[derive(Debug, Clone)]
pub struct ScrubOutcome {
    pub content: String,
    pub changed: bool,
    /// Character delta between input and output (positive when the text
    /// shrank). Counted in Unicode scalar values, not bytes.
    pub chars_removed: i64,
}

/// Result of a full file run, serializable for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ScrubReport {
    pub file: PathBuf,
    pub changed: bool,
    pub chars_removed: i64,
    pub bytes_before: u64,
    pub bytes_after: u64,
    pub backup_path: Option<PathBuf>,
    pub dry_run: bool,
    pub completed_at: DateTime<Utc>,
}

/// Applies the fixed fallback-block rule to files: whole-file read,
/// in-memory substitution, conditional whole-file write-back.
pub struct Scrubber {
    rule: FallbackRule,
    backup: bool,
    backup_suffix: String,
    dry_run: bool,
}

impl Scrubber {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rule: FallbackRule::new()?,
            backup: false,
            backup_suffix: ".bak".to_string(),
            dry_run: false,
        })
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn with_backup_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.backup_suffix = suffix.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Pure text operation: applies the substitution and reports whether
    /// anything changed. Unmatched input is returned unchanged.
    pub fn clean(&self, content: &str) -> ScrubOutcome {
        let cleaned = self.rule.apply(content);

        if cleaned == content {
            return ScrubOutcome {
                content: content.to_string(),
                changed: false,
                chars_removed: 0,
            };
        }

        let chars_removed = content.chars().count() as i64 - cleaned.chars().count() as i64;
        ScrubOutcome {
            content: cleaned.into_owned(),
            changed: true,
            chars_removed,
        }
    }

    /// Reads the file at `path`, cleans it, and writes the result back in
    /// place when it changed. Dry-run mode skips the backup and the write.
    pub fn scrub_file(&self, path: &Path) -> Result<ScrubReport> {
        let content = fs::read_to_string(path).map_err(|e| map_read_error(e, path))?;
        let bytes_before = content.len() as u64;

        let outcome = self.clean(&content);
        let bytes_after = outcome.content.len() as u64;

        let mut backup_path = None;
        if outcome.changed && !self.dry_run {
            if self.backup {
                let backup = self.backup_path_for(path);
                fs::copy(path, &backup).map_err(|e| map_write_error(e, &backup))?;
                backup_path = Some(backup);
            }

            fs::write(path, &outcome.content).map_err(|e| map_write_error(e, path))?;
        }

        Ok(ScrubReport {
            file: path.to_path_buf(),
            changed: outcome.changed,
            chars_removed: outcome.chars_removed,
            bytes_before,
            bytes_after,
            backup_path,
            dry_run: self.dry_run,
            completed_at: Utc::now(),
        })
    }

    fn backup_path_for(&self, path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(&self.backup_suffix);
        PathBuf::from(name)
    }
}

fn map_read_error(error: io::Error, path: &Path) -> HtmlScrubError {
    match error.kind() {
        io::ErrorKind::NotFound => HtmlScrubError::FileNotFound {
            path: path.display().to_string(),
        },
        io::ErrorKind::PermissionDenied => HtmlScrubError::Permission {
            path: path.display().to_string(),
        },
        // read_to_string reports non-UTF-8 content as InvalidData
        io::ErrorKind::InvalidData => HtmlScrubError::InvalidEncoding {
            path: path.display().to_string(),
        },
        _ => HtmlScrubError::Io(error),
    }
}

fn map_write_error(error: io::Error, path: &Path) -> HtmlScrubError {
    match error.kind() {
        io::ErrorKind::PermissionDenied => HtmlScrubError::Permission {
            path: path.display().to_string(),
        },
        _ => HtmlScrubError::Io(error),
    }
}
