//! Deck assembly from a slide table and the two source texts.

use crate::excerpt::{article_excerpt, summary_preview};
use crate::template::DeckTemplate;
use crate::types::Deck;
use crate::Result;

/// Build a deck: title slide, one bullet slide per table entry, then the
/// article excerpt and summary preview appendix slides.
///
/// Source texts are used as given; a loader placeholder is excerpted like
/// any other text.
pub fn build_deck(template: &DeckTemplate, article_text: &str, summary_text: &str) -> Deck {
    let mut deck = Deck::new();

    let title = &template.title;
    deck.add_title_slide(&title.title, &title.subtitle, &title.notes);

    for spec in &template.slides {
        deck.add_bullet_slide(&spec.title, &spec.bullets, &spec.notes);
    }

    let appendix = &template.appendix;
    deck.add_bullet_slide(
        &appendix.excerpt_title,
        &[article_excerpt(article_text)],
        &appendix.excerpt_notes,
    );
    deck.add_bullet_slide(
        &appendix.summary_title,
        &summary_preview(summary_text),
        &appendix.summary_notes,
    );

    log::debug!("Built '{}' deck with {} slides", template.name, deck.len());
    deck
}

/// Build the general-audience deck.
pub fn build_general_deck(article_text: &str, summary_text: &str) -> Result<Deck> {
    Ok(build_deck(&DeckTemplate::general()?, article_text, summary_text))
}

/// Build the practitioner deck.
pub fn build_practitioner_deck(article_text: &str, summary_text: &str) -> Result<Deck> {
    Ok(build_deck(&DeckTemplate::practitioner()?, article_text, summary_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::placeholder;
    use crate::template::{AppendixSpec, SlideSpec, TitleSpec};
    use crate::types::{Layout, SlideBody};

    fn synthetic(slides: Vec<SlideSpec>) -> DeckTemplate {
        DeckTemplate {
            name: "synthetic".to_string(),
            title: TitleSpec {
                title: "Title".to_string(),
                subtitle: "Sub".to_string(),
                notes: String::new(),
            },
            slides,
            appendix: AppendixSpec {
                excerpt_title: "Excerpt".to_string(),
                excerpt_notes: "excerpt notes".to_string(),
                summary_title: "Summary".to_string(),
                summary_notes: "summary notes".to_string(),
            },
        }
    }

    fn spec(title: &str, bullets: &[&str]) -> SlideSpec {
        SlideSpec {
            title: title.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            notes: format!("notes for {}", title),
        }
    }

    #[test]
    fn test_slide_order_follows_table() {
        let template = synthetic(vec![spec("B", &["1"]), spec("A", &["2"]), spec("C", &[])]);
        let deck = build_deck(&template, "article", "summary");

        let titles: Vec<&str> = deck.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Title", "B", "A", "C", "Excerpt", "Summary"]);
        assert_eq!(deck.slides[0].layout, Layout::Title);
        assert_eq!(deck.slides[0].notes, None);
        assert_eq!(deck.slides[2].notes.as_deref(), Some("notes for A"));
    }

    #[test]
    fn test_empty_table() {
        let deck = build_deck(&synthetic(Vec::new()), "", "");
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_slide_count_is_independent_of_sources() {
        let general = DeckTemplate::general().unwrap();
        let practitioner = DeckTemplate::practitioner().unwrap();
        let long = "段落\n".repeat(500);

        for (article, summary) in [("", ""), (long.as_str(), long.as_str())] {
            assert_eq!(build_deck(&general, article, summary).len(), 22);
            assert_eq!(build_deck(&practitioner, article, summary).len(), 17);
        }
    }

    #[test]
    fn test_appendix_slides() {
        let article = "x".repeat(250);
        let summary = (1..=10)
            .map(|i| format!("summary line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let deck = build_general_deck(&article, &summary).unwrap();

        let excerpt = &deck.slides[20];
        assert_eq!(excerpt.title, "附錄：原文摘錄（摘要）");
        assert_eq!(excerpt.bullet_texts(), vec![format!("{}…", "x".repeat(200))]);
        assert_eq!(excerpt.notes.as_deref(), Some("提醒：更多可參閱全文與分析摘要。"));

        let preview = &deck.slides[21];
        let expected: Vec<String> = (1..=8).map(|i| format!("summary line {}", i)).collect();
        assert_eq!(preview.bullet_texts(), expected);
        assert_eq!(preview.notes.as_deref(), Some("精要段落供速讀。"));
    }

    #[test]
    fn test_blank_summary_leaves_empty_paragraph() {
        let deck = build_practitioner_deck("article", "\n\n").unwrap();
        let preview = &deck.slides[16];

        assert_eq!(preview.bullet_texts(), vec![""]);
        assert_eq!(preview.paragraphs()[0].font_size, None);
    }

    #[test]
    fn test_placeholder_flows_into_excerpt() {
        let failure = placeholder("No such file or directory (os error 2): '/nowhere/article.txt'");
        let deck = build_general_deck(&failure, &failure).unwrap();

        let bullets = deck.slides[20].bullet_texts();
        assert_eq!(bullets.len(), 1);
        assert!(bullets[0].starts_with("(讀取失敗: No such file"));
        assert!(bullets[0].ends_with('…'));
        assert_eq!(deck.slides[21].bullet_texts(), vec![failure.as_str()]);
    }

    #[test]
    fn test_title_slide_content() {
        let deck = build_practitioner_deck("", "").unwrap();
        let title = &deck.slides[0];

        assert_eq!(title.title, "資深慈濟人的閱讀與實踐");
        assert_eq!(
            title.body,
            SlideBody::Subtitle("從〈藥王本事〉到志業路｜40分鐘分享".to_string())
        );
        assert_eq!(deck.notes_count(), 17);
    }
}
