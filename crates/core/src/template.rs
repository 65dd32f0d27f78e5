//! Slide tables for the two talk decks.
//!
//! The tables are JSON assets under `decks/`, embedded at compile time and
//! parsed on demand, so the traversal in [`crate::builder`] never depends on
//! the content itself.

use crate::Result;
use serde::{Deserialize, Serialize};

const GENERAL_JSON: &str = include_str!("../decks/general.json");
const PRACTITIONER_JSON: &str = include_str!("../decks/practitioner.json");

/// One body slide of a deck: title, bullets and speaker notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    pub title: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// The opening title slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub notes: String,
}

/// Titles and notes of the two trailing slides built from source texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendixSpec {
    pub excerpt_title: String,
    #[serde(default)]
    pub excerpt_notes: String,
    pub summary_title: String,
    #[serde(default)]
    pub summary_notes: String,
}

/// Everything fixed about a deck; only the appendix bullets vary per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckTemplate {
    /// Short identifier used in logs.
    pub name: String,
    pub title: TitleSpec,
    /// Body slides in presentation order.
    pub slides: Vec<SlideSpec>,
    pub appendix: AppendixSpec,
}

impl DeckTemplate {
    /// The general-audience deck on the Medicine King chapter.
    pub fn general() -> Result<Self> {
        Self::from_json(GENERAL_JSON)
    }

    /// The deck for senior volunteers and practitioners.
    pub fn practitioner() -> Result<Self> {
        Self::from_json(PRACTITIONER_JSON)
    }

    /// Parse a template from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Slide count of any deck built from this template.
    pub fn slide_count(&self) -> usize {
        1 + self.slides.len() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_general_table() {
        let template = DeckTemplate::general().unwrap();

        assert_eq!(template.name, "general");
        assert_eq!(template.title.title, "《法華經 藥王菩薩本事品》");
        assert_eq!(template.slides.len(), 19);
        assert_eq!(template.slides[0].title, "議程");
        assert_eq!(template.slides[0].bullets.len(), 6);
        assert_eq!(template.slides[18].title, "結語");
        assert_eq!(template.slide_count(), 22);
    }

    #[test]
    fn test_practitioner_table() {
        let template = DeckTemplate::practitioner().unwrap();

        assert_eq!(template.title.title, "資深慈濟人的閱讀與實踐");
        assert_eq!(template.slides.len(), 14);
        assert_eq!(template.slides[13].title, "Q&A 與承諾");
        assert_eq!(template.appendix.excerpt_notes, "經文語境作為組織實踐的源頭。");
        assert_eq!(template.slide_count(), 17);
    }

    #[test]
    fn test_every_table_slide_has_notes() {
        for template in [DeckTemplate::general().unwrap(), DeckTemplate::practitioner().unwrap()] {
            assert!(template.slides.iter().all(|s| !s.notes.is_empty()));
            assert!(template.slides.iter().all(|s| !s.bullets.is_empty()));
        }
    }

    #[test]
    fn test_notes_default_to_empty() {
        let json = r#"{
            "name": "t",
            "title": {"title": "T", "subtitle": "S"},
            "slides": [{"title": "A", "bullets": []}],
            "appendix": {"excerpt_title": "E", "summary_title": "M"}
        }"#;
        let template = DeckTemplate::from_json(json).unwrap();

        assert_eq!(template.title.notes, "");
        assert_eq!(template.slides[0].notes, "");
        assert_eq!(template.appendix.summary_notes, "");
    }

    #[test]
    fn test_malformed_json() {
        let err = DeckTemplate::from_json("{\"name\": 3}").unwrap_err();
        assert!(matches!(err, Error::TemplateError(_)));
    }
}
