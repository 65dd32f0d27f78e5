//! Excerpts of the source texts shown on the appendix slides.

use crate::source::normalize_newlines;

/// Number of characters of the article quoted on the excerpt slide.
pub const ARTICLE_EXCERPT_CHARS: usize = 200;

/// Number of summary lines quoted on the summary slide.
pub const SUMMARY_PREVIEW_LINES: usize = 8;

/// Appended to the article excerpt whether or not it was cut short.
const ELLIPSIS: char = '…';

/// Separators `summary_preview` splits on once line endings are `\n`.
const LINE_SEPARATORS: &[char] = &[
    '\n', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// First [`ARTICLE_EXCERPT_CHARS`] characters of the article as one line.
///
/// Line endings are normalized before the cut, so `\r\n` counts as one
/// character; each line break then becomes a single space. Counts
/// characters, not bytes, so CJK text is never split mid-character.
pub fn article_excerpt(text: &str) -> String {
    let mut excerpt: String = normalize_newlines(text)
        .chars()
        .take(ARTICLE_EXCERPT_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    excerpt.push(ELLIPSIS);
    excerpt
}

/// First [`SUMMARY_PREVIEW_LINES`] non-blank lines of the summary.
///
/// Lines end at `\r\n`, `\r`, `\n`, and the other Unicode line and record
/// separators. Lines that are empty or only whitespace are skipped;
/// surviving lines are returned untrimmed.
pub fn summary_preview(text: &str) -> Vec<String> {
    normalize_newlines(text)
        .split(LINE_SEPARATORS)
        .filter(|line| !line.trim().is_empty())
        .take(SUMMARY_PREVIEW_LINES)
        .map(str::to_string)
        .collect()
}
