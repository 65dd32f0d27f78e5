//! Core deck model, source-text loading, and slide tables for the
//! Medicine King talk decks.

pub mod builder;
pub mod error;
pub mod excerpt;
pub mod source;
pub mod template;
pub mod types;

pub use builder::{build_deck, build_general_deck, build_practitioner_deck};
pub use error::{Error, Result};
pub use excerpt::{article_excerpt, summary_preview};
pub use source::SourceText;
pub use template::{AppendixSpec, DeckTemplate, SlideSpec, TitleSpec};
pub use types::{Deck, FontSize, Layout, Paragraph, Slide, SlideBody, BULLET_FONT_SIZE};
