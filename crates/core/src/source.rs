//! Loading of the article and summary source texts.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A source text file, either loaded or replaced by a failure record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    /// Full file content.
    Loaded(String),
    /// The file could not be read or decoded as UTF-8.
    Failed {
        /// Path that was attempted.
        path: PathBuf,
        /// Error detail, including the path.
        reason: String,
    },
}

impl SourceText {
    /// Read a whole file as UTF-8 text with `\r\n` and `\r` line endings
    /// turned into `\n`.
    ///
    /// Never fails: any read or decode error yields [`SourceText::Failed`].
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                log::debug!("Loaded {} ({} bytes)", path.display(), text.len());
                Self::Loaded(normalize_newlines(&text).into_owned())
            }
            Err(e) => {
                let reason = format!("{}: '{}'", e, path.display());
                log::warn!("Using placeholder text, read failed: {}", reason);
                Self::Failed {
                    path: path.to_path_buf(),
                    reason,
                }
            }
        }
    }

    /// The file content, or the placeholder string for a failed read.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Loaded(text) => Cow::Borrowed(text),
            Self::Failed { reason, .. } => Cow::Owned(placeholder(reason)),
        }
    }

    /// Whether the file was read successfully.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Replace `\r\n` and lone `\r` line endings with `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Placeholder used in place of unreadable source text.
pub fn placeholder(reason: &str) -> String {
    format!("(讀取失敗: {})", reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("article.txt");
        std::fs::write(&path, "第一行\n第二行\n").unwrap();

        let source = SourceText::load(&path);
        assert!(source.is_loaded());
        assert_eq!(source.text(), "第一行\n第二行\n");
    }

    #[test]
    fn test_load_normalizes_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("windows.txt");
        std::fs::write(&path, "一\r\n二\r三\n").unwrap();

        assert_eq!(SourceText::load(&path).text(), "一\n二\n三\n");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("a\r\r\nb"), "a\n\nb");
        assert!(matches!(normalize_newlines("plain\n"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_file_yields_placeholder() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let source = SourceText::load(&path);
        assert!(!source.is_loaded());

        let SourceText::Failed { path: failed, reason } = &source else {
            panic!("expected failure");
        };
        assert_eq!(failed, &path);
        assert!(reason.contains("missing.txt"));

        let text = source.text();
        assert!(text.starts_with("(讀取失敗: "));
        assert!(text.contains(reason.as_str()));
        assert!(text.ends_with(')'));
    }

    #[test]
    fn test_invalid_utf8_is_a_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        assert!(!SourceText::load(&path).is_loaded());
    }

    #[test]
    fn test_directory_is_a_failure() {
        let dir = TempDir::new().unwrap();
        assert!(!SourceText::load(dir.path()).is_loaded());
    }
}
