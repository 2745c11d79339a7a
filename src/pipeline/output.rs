//! Report destinations.
//!
//! A rendered report goes either to stdout or to the file named by
//! `-O/--output-file`. The destination also decides the `auto` format and
//! whether ANSI colors may be used: files always get plain text.

use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Where a rendered report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Resolve `auto`: the aligned table for an interactive terminal, the
    /// banner summary for pipes and files.
    #[must_use]
    pub fn resolve_format(&self, requested: ReportFormat) -> ReportFormat {
        match requested {
            ReportFormat::Auto if self.is_terminal() => ReportFormat::Table,
            ReportFormat::Auto => ReportFormat::Summary,
            other => other,
        }
    }

    /// Colors require a terminal, no `--no-color` and no `NO_COLOR`.
    #[must_use]
    pub fn use_color(&self, no_color_flag: bool) -> bool {
        color_allowed(no_color_flag) && self.is_terminal()
    }

    /// Write the report followed by a newline.
    pub fn write(&self, content: &str, quiet: bool) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{content}").context("Failed to write report to stdout")
            }
            Self::File(path) => {
                std::fs::write(path, format!("{content}\n"))
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                if !quiet {
                    tracing::info!("Report written to {}", path.display());
                }
                Ok(())
            }
        }
    }
}

/// `--no-color` and the `NO_COLOR` convention both disable colors.
#[must_use]
pub fn color_allowed(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        let path = PathBuf::from("/tmp/comparison.csv");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_explicit_format_is_kept() {
        for format in [ReportFormat::Csv, ReportFormat::Markdown, ReportFormat::Table] {
            assert_eq!(OutputTarget::Stdout.resolve_format(format), format);
        }
    }

    #[test]
    fn test_file_target_resolves_auto_to_plain_summary() {
        let target = OutputTarget::File(PathBuf::from("/tmp/comparison.txt"));
        assert_eq!(target.resolve_format(ReportFormat::Auto), ReportFormat::Summary);
        assert!(!target.use_color(false));
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!color_allowed(true));
        assert!(!OutputTarget::Stdout.use_color(true));
    }

    #[test]
    fn test_file_write_ends_with_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shared.csv");
        OutputTarget::File(path.clone()).write("water,0,1.0000,0,1.0000", true).unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "water,0,1.0000,0,1.0000\n"
        );
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let target = OutputTarget::File(tmp.path().join("missing").join("out.csv"));
        let err = target.write("x", true).unwrap_err();
        assert!(err.to_string().contains("Failed to write report"));
    }
}
