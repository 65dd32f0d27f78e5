//! Generation pipeline for the two talk decks.
//!
//! [`run`] reads the article and summary once, builds both decks, and writes
//! them to the paths in [`Config`].

use anyhow::{Context, Result};
use deckgen_core::{build_general_deck, build_practitioner_deck, Deck, Error, SourceText};
use deckgen_pptx::{PptxReader, PptxWriter, DEFAULT_LANGUAGE};
use std::path::{Path, PathBuf};

/// Directory the default paths live in.
pub const DEFAULT_WORKDIR: &str = "/workspace";

pub const ARTICLE_FILE: &str = "《法華經 藥王菩薩本事品》娑婆堪忍 深體佛意 - 第1809集.txt";
pub const SUMMARY_FILE: &str = "分析摘要_藥王菩薩本事品_娑婆堪忍_第1809集.txt";
pub const GENERAL_OUTPUT_FILE: &str = "PPT_藥王菩薩本事品_40min.pptx";
pub const PRACTITIONER_OUTPUT_FILE: &str = "PPT_慈濟資深分享_40min.pptx";

/// Input and output locations plus writer options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub article_path: PathBuf,
    pub summary_path: PathBuf,
    pub general_output: PathBuf,
    pub practitioner_output: PathBuf,
    /// Language tag written on text runs.
    pub language: String,
    /// Re-read each written deck and compare it with what was built.
    pub verify: bool,
}

impl Config {
    /// Default file names rooted at `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            article_path: dir.join(ARTICLE_FILE),
            summary_path: dir.join(SUMMARY_FILE),
            general_output: dir.join(GENERAL_OUTPUT_FILE),
            practitioner_output: dir.join(PRACTITIONER_OUTPUT_FILE),
            language: DEFAULT_LANGUAGE.to_string(),
            verify: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir(DEFAULT_WORKDIR)
    }
}

/// Build and write both decks, returning the written paths in order.
///
/// Unreadable sources are replaced by placeholder text; write failures are
/// returned as errors.
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    let article = SourceText::load(&config.article_path);
    let summary = SourceText::load(&config.summary_path);
    let article_text = article.text();
    let summary_text = summary.text();

    let writer = PptxWriter::new().with_language(config.language.clone());

    let general = build_general_deck(&article_text, &summary_text)?;
    save(&writer, &general, &config.general_output, config.verify)?;

    let practitioner = build_practitioner_deck(&article_text, &summary_text)?;
    save(&writer, &practitioner, &config.practitioner_output, config.verify)?;

    Ok(vec![
        config.general_output.clone(),
        config.practitioner_output.clone(),
    ])
}

fn save(writer: &PptxWriter, deck: &Deck, path: &Path, verify: bool) -> Result<()> {
    writer
        .save(deck, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if verify {
        verify_deck(deck, path).with_context(|| format!("Failed to verify {}", path.display()))?;
        log::info!("Verified {}", path.display());
    }

    Ok(())
}

/// Re-read a written deck and check slide count and titles.
pub fn verify_deck(expected: &Deck, path: &Path) -> deckgen_core::Result<()> {
    let actual = PptxReader::new().open(path)?;

    if actual.len() != expected.len() {
        return Err(Error::VerificationFailed(format!(
            "expected {} slides, found {}",
            expected.len(),
            actual.len()
        )));
    }

    for (idx, (want, got)) in expected.slides.iter().zip(&actual.slides).enumerate() {
        if want.title != got.title || want.layout != got.layout {
            return Err(Error::VerificationFailed(format!(
                "slide {} differs: expected '{}', found '{}'",
                idx + 1,
                want.title,
                got.title
            )));
        }
    }

    Ok(())
}
