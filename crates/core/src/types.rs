//! Domain types for representing an assembled deck.

/// Point size applied to every bullet run.
pub const BULLET_FONT_SIZE: FontSize = FontSize::pt(20);

/// An ordered collection of slides, built in one pass and then serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide using the title layout.
    ///
    /// Title and subtitle are written verbatim. Notes are attached only when
    /// non-empty.
    pub fn add_title_slide(&mut self, title: &str, subtitle: &str, notes: &str) -> &Slide {
        self.push(Slide {
            layout: Layout::Title,
            title: title.to_string(),
            body: SlideBody::Subtitle(subtitle.to_string()),
            notes: non_empty(notes),
        })
    }

    /// Append a slide using the title-and-content layout.
    ///
    /// Each bullet becomes one paragraph at level 0 with the bullet font size,
    /// in input order. With no bullets the body keeps a single empty
    /// paragraph, as a freshly cleared text frame would.
    pub fn add_bullet_slide<S: AsRef<str>>(
        &mut self,
        title: &str,
        bullets: &[S],
        notes: &str,
    ) -> &Slide {
        let paragraphs = if bullets.is_empty() {
            vec![Paragraph::default()]
        } else {
            bullets
                .iter()
                .map(|b| Paragraph::new(b.as_ref()).with_font_size(BULLET_FONT_SIZE))
                .collect()
        };

        self.push(Slide {
            layout: Layout::TitleAndContent,
            title: title.to_string(),
            body: SlideBody::Bullets(paragraphs),
            notes: non_empty(notes),
        })
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of slides carrying speaker notes.
    pub fn notes_count(&self) -> usize {
        self.slides.iter().filter(|s| s.notes.is_some()).count()
    }

    fn push(&mut self, slide: Slide) -> &Slide {
        log::debug!("Slide {}: {}", self.slides.len() + 1, slide.title);
        self.slides.push(slide);
        &self.slides[self.slides.len() - 1]
    }
}

fn non_empty(notes: &str) -> Option<String> {
    if notes.is_empty() {
        None
    } else {
        Some(notes.to_string())
    }
}

/// The built-in layout a slide is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Centered title with a subtitle (first layout).
    Title,
    /// Title with a content placeholder (second layout).
    TitleAndContent,
}

impl Layout {
    /// 1-based index of the layout part in the package.
    pub fn index(self) -> usize {
        match self {
            Self::Title => 1,
            Self::TitleAndContent => 2,
        }
    }

    /// Layout for a 1-based layout part index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Title),
            2 => Some(Self::TitleAndContent),
            _ => None,
        }
    }
}

/// A single slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Layout the slide's placeholders come from.
    pub layout: Layout,

    /// Title placeholder text.
    pub title: String,

    /// Subtitle or bulleted body.
    pub body: SlideBody,

    /// Speaker notes, if any.
    pub notes: Option<String>,
}

impl Slide {
    /// Bullet paragraphs, empty for title slides.
    pub fn paragraphs(&self) -> &[Paragraph] {
        match &self.body {
            SlideBody::Bullets(paragraphs) => paragraphs,
            SlideBody::Subtitle(_) => &[],
        }
    }

    /// Bullet texts in order.
    pub fn bullet_texts(&self) -> Vec<&str> {
        self.paragraphs().iter().map(|p| p.text.as_str()).collect()
    }
}

/// Body content of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBody {
    /// Subtitle placeholder text (title layout).
    Subtitle(String),
    /// Paragraphs of the content placeholder.
    Bullets(Vec<Paragraph>),
}

/// One paragraph of a content placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph text.
    pub text: String,

    /// Outline level (0 = top level).
    pub level: u8,

    /// Run font size, if set explicitly.
    pub font_size: Option<FontSize>,
}

impl Paragraph {
    /// Create a top-level paragraph with no explicit font size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 0,
            font_size: None,
        }
    }

    /// Set the run font size.
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// Font size in hundredths of a point, as stored in DrawingML `sz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontSize(u32);

impl FontSize {
    /// Font size from whole points.
    pub const fn pt(points: u32) -> Self {
        Self(points * 100)
    }

    /// Font size from hundredths of a point.
    pub const fn from_centipoints(value: u32) -> Self {
        Self(value)
    }

    /// Hundredths of a point.
    pub fn centipoints(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide() {
        let mut deck = Deck::new();
        let slide = deck.add_title_slide("Title", "Subtitle", "Speak slowly");

        assert_eq!(slide.layout, Layout::Title);
        assert_eq!(slide.title, "Title");
        assert_eq!(slide.body, SlideBody::Subtitle("Subtitle".to_string()));
        assert_eq!(slide.notes.as_deref(), Some("Speak slowly"));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_empty_notes_are_dropped() {
        let mut deck = Deck::new();
        deck.add_title_slide("T", "S", "");
        deck.add_bullet_slide("T", &["a"], "");

        assert_eq!(deck.notes_count(), 0);
    }

    #[test]
    fn test_bullet_slide_paragraphs() {
        let mut deck = Deck::new();
        let slide = deck.add_bullet_slide("Agenda", &["one", "two", "three"], "notes");

        assert_eq!(slide.layout, Layout::TitleAndContent);
        assert_eq!(slide.bullet_texts(), vec!["one", "two", "three"]);
        for p in slide.paragraphs() {
            assert_eq!(p.level, 0);
            assert_eq!(p.font_size, Some(FontSize::pt(20)));
        }
    }

    #[test]
    fn test_bullet_slide_keeps_text_verbatim() {
        let mut deck = Deck::new();
        let bullets = vec!["  indented ".to_string(), "<&>".to_string()];
        let slide = deck.add_bullet_slide("T", &bullets, "");

        assert_eq!(slide.bullet_texts(), vec!["  indented ", "<&>"]);
    }

    #[test]
    fn test_empty_bullets_leave_default_paragraph() {
        let mut deck = Deck::new();
        let empty: [&str; 0] = [];
        let slide = deck.add_bullet_slide("Nothing", &empty, "");

        assert_eq!(slide.paragraphs(), &[Paragraph::default()]);
        assert_eq!(slide.paragraphs()[0].font_size, None);
    }

    #[test]
    fn test_layout_index() {
        assert_eq!(Layout::Title.index(), 1);
        assert_eq!(Layout::from_index(2), Some(Layout::TitleAndContent));
        assert_eq!(Layout::from_index(7), None);
    }

    #[test]
    fn test_font_size() {
        assert_eq!(FontSize::pt(20).centipoints(), 2000);
        assert_eq!(FontSize::from_centipoints(1800), FontSize::pt(18));
    }
}
