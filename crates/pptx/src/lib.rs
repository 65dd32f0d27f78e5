//! PPTX (Office Open XML) backend for deck generation.
//!
//! Writes a [`deckgen_core::Deck`] as a .pptx package (a ZIP archive of XML
//! parts) and reads such packages back.

mod parts;
pub mod reader;
pub mod writer;

pub use reader::PptxReader;
pub use writer::{PptxWriter, DEFAULT_LANGUAGE};
