//! PPTX file writer implementation.

use crate::parts::{self, NS_A, NS_P, NS_R, SP_TREE_HEADER};
use deckgen_core::{Deck, Error, Layout, Paragraph, Result, Slide, SlideBody};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Language tag written on every run unless overridden.
pub const DEFAULT_LANGUAGE: &str = "zh-TW";

/// Writer for PPTX (Office Open XML) files.
#[derive(Debug, Clone)]
pub struct PptxWriter {
    /// Language tag (`lang`) of text runs.
    language: String,
}

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Set the language tag written on text runs.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Write a deck to a file, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn save(&self, deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = self.write(deck, BufWriter::new(file))?;
        writer.flush()?;
        log::info!("Saved {} slides to {}", deck.len(), path.display());
        Ok(())
    }

    /// Write a deck as a PPTX package, returning the inner writer.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, content) in self.parts(deck) {
            log::debug!("Writing part {}", name);
            zip.start_file(name.as_str(), options)
                .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
            zip.write_all(content.as_bytes())?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// All package parts of a deck, as (part name, XML) pairs.
    pub(crate) fn parts(&self, deck: &Deck) -> Vec<(String, String)> {
        let slide_count = deck.len();
        let notes_count = deck.notes_count();
        let theme = parts::theme_xml();
        let doc_title = deck.slides.first().map(|s| s.title.as_str()).unwrap_or("");

        let mut out = vec![
            (
                "[Content_Types].xml".to_string(),
                parts::content_types_xml(slide_count, notes_count),
            ),
            ("_rels/.rels".to_string(), parts::package_rels_xml()),
            ("docProps/core.xml".to_string(), parts::core_props_xml(&escape_text(doc_title))),
            (
                "docProps/app.xml".to_string(),
                parts::app_props_xml(slide_count, notes_count),
            ),
            ("ppt/presentation.xml".to_string(), parts::presentation_xml(slide_count)),
            (
                "ppt/_rels/presentation.xml.rels".to_string(),
                parts::presentation_rels_xml(slide_count),
            ),
            ("ppt/presProps.xml".to_string(), parts::pres_props_xml()),
            ("ppt/viewProps.xml".to_string(), parts::view_props_xml()),
            ("ppt/tableStyles.xml".to_string(), parts::table_styles_xml()),
            ("ppt/slideMasters/slideMaster1.xml".to_string(), parts::slide_master_xml()),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels".to_string(),
                parts::slide_master_rels_xml(),
            ),
            ("ppt/notesMasters/notesMaster1.xml".to_string(), parts::notes_master_xml()),
            (
                "ppt/notesMasters/_rels/notesMaster1.xml.rels".to_string(),
                parts::notes_master_rels_xml(),
            ),
            ("ppt/theme/theme1.xml".to_string(), theme.clone()),
            ("ppt/theme/theme2.xml".to_string(), theme),
        ];

        for layout in [Layout::Title, Layout::TitleAndContent] {
            out.push((parts::layout_part(layout), parts::slide_layout_xml(layout)));
            out.push((parts::layout_rels_part(layout), parts::slide_layout_rels_xml()));
        }

        let mut notes_number = 0;
        for (idx, slide) in deck.slides.iter().enumerate() {
            let slide_number = idx + 1;
            let notes_ref = match &slide.notes {
                Some(notes) => {
                    notes_number += 1;
                    out.push((parts::notes_part(notes_number), self.notes_xml(notes)));
                    out.push((
                        parts::notes_rels_part(notes_number),
                        parts::notes_rels_xml(slide_number),
                    ));
                    Some(notes_number)
                }
                None => None,
            };

            out.push((parts::slide_part(slide_number), self.slide_xml(slide)));
            out.push((
                parts::slide_rels_part(slide_number),
                parts::slide_rels_xml(slide.layout, notes_ref),
            ));
        }

        out
    }

    /// Generate slide XML content.
    pub(crate) fn slide_xml(&self, slide: &Slide) -> String {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            NS_A, NS_R, NS_P
        ));
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(SP_TREE_HEADER);

        // IDs: 1=group, 2=title, 3=body
        let title_ph = match slide.layout {
            Layout::Title => r#"<p:ph type="ctrTitle"/>"#,
            Layout::TitleAndContent => r#"<p:ph type="title"/>"#,
        };
        self.write_shape(&mut xml, 2, "Title 1", title_ph, &self.text_frame(&slide.title));

        match &slide.body {
            SlideBody::Subtitle(subtitle) => {
                self.write_shape(
                    &mut xml,
                    3,
                    "Subtitle 2",
                    r#"<p:ph type="subTitle" idx="1"/>"#,
                    &self.text_frame(subtitle),
                );
            }
            SlideBody::Bullets(paragraphs) => {
                let mut body = String::new();
                for paragraph in paragraphs {
                    self.write_bullet(&mut body, paragraph);
                }
                self.write_shape(
                    &mut xml,
                    3,
                    "Content Placeholder 2",
                    r#"<p:ph idx="1"/>"#,
                    &body,
                );
            }
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        xml
    }

    /// Generate notes slide XML content.
    pub(crate) fn notes_xml(&self, notes: &str) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(
            r#"<p:notes xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            NS_A, NS_R, NS_P
        ));
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(SP_TREE_HEADER);
        xml.push_str(concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#,
            r#"<p:nvPr><p:ph type="sldImg"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp>"#,
        ));
        self.write_shape(
            &mut xml,
            3,
            "Notes Placeholder 2",
            r#"<p:ph type="body" idx="1"/>"#,
            &self.text_frame(notes),
        );
        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:notes>");
        xml
    }

    /// Write a placeholder shape whose position is inherited from the layout.
    fn write_shape(&self, xml: &mut String, id: u32, name: &str, ph: &str, paragraphs: &str) {
        xml.push_str("<p:sp><p:nvSpPr>");
        xml.push_str(&format!(r#"<p:cNvPr id="{}" name="{}"/>"#, id, name));
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(&format!("<p:nvPr>{}</p:nvPr>", ph));
        xml.push_str("</p:nvSpPr><p:spPr/>");
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
        xml.push_str(paragraphs);
        xml.push_str("</p:txBody></p:sp>");
    }

    /// Paragraphs of a plain text frame: one paragraph per line.
    fn text_frame(&self, text: &str) -> String {
        let mut xml = String::new();
        for line in text.split('\n') {
            xml.push_str("<a:p>");
            if line.is_empty() {
                xml.push_str(&format!(r#"<a:endParaRPr lang="{}" dirty="0"/>"#, self.language));
            } else {
                self.write_run(&mut xml, line, None);
            }
            xml.push_str("</a:p>");
        }
        xml
    }

    /// One bullet paragraph; embedded newlines become line breaks.
    fn write_bullet(&self, xml: &mut String, paragraph: &Paragraph) {
        xml.push_str("<a:p>");
        if paragraph.level > 0 {
            xml.push_str(&format!(r#"<a:pPr lvl="{}"/>"#, paragraph.level));
        }

        let size = paragraph.font_size.map(|s| s.centipoints());
        if paragraph.text.is_empty() {
            xml.push_str(&format!(
                r#"<a:endParaRPr lang="{}"{} dirty="0"/>"#,
                self.language,
                size_attr(size)
            ));
        } else {
            for (i, line) in paragraph.text.split('\n').enumerate() {
                if i > 0 {
                    xml.push_str(&format!(
                        r#"<a:br><a:rPr lang="{}"{} dirty="0"/></a:br>"#,
                        self.language,
                        size_attr(size)
                    ));
                }
                if !line.is_empty() {
                    self.write_run(xml, line, size);
                }
            }
        }
        xml.push_str("</a:p>");
    }

    fn write_run(&self, xml: &mut String, text: &str, size: Option<u32>) {
        xml.push_str(&format!(
            r#"<a:r><a:rPr lang="{}"{} dirty="0"/><a:t>{}</a:t></a:r>"#,
            self.language,
            size_attr(size),
            escape_text(text)
        ));
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn size_attr(size: Option<u32>) -> String {
    size.map(|s| format!(r#" sz="{}""#, s)).unwrap_or_default()
}

/// Escape text for an XML text node, dropping characters XML 1.0 forbids.
pub(crate) fn escape_text(text: &str) -> String {
    let valid: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    quick_xml::escape::escape(&valid).into_owned()
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgen_core::FontSize;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn sample_deck() -> Deck {
        let mut deck = Deck::new();
        deck.add_title_slide("《法華經》", "40分鐘分享", "開場");
        deck.add_bullet_slide("議程", &["一", "二"], "");
        deck.add_bullet_slide("附錄", &["a & b <c>"], "精要");
        deck
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_text("bad\u{0}\u{b}char"), "badchar");
        assert_eq!(escape_text("tab\there"), "tab\there");
    }

    #[test]
    fn test_bullet_paragraphs() {
        let writer = PptxWriter::new();
        let deck = sample_deck();
        let xml = writer.slide_xml(&deck.slides[1]);

        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert_eq!(xml.matches(r#"sz="2000""#).count(), 2);
        assert!(xml.find("<a:t>一</a:t>") < xml.find("<a:t>二</a:t>"));
        assert!(!xml.contains("lvl="));
    }

    #[test]
    fn test_title_slide_xml() {
        let writer = PptxWriter::new().with_language("en-US");
        let xml = writer.slide_xml(&sample_deck().slides[0]);

        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains("<a:t>40分鐘分享</a:t>"));
        assert!(xml.contains(r#"lang="en-US""#));
    }

    #[test]
    fn test_empty_bullet_keeps_one_paragraph() {
        let mut deck = Deck::new();
        let empty: [&str; 0] = [];
        deck.add_bullet_slide("Empty", &empty, "");
        let xml = PptxWriter::new().slide_xml(&deck.slides[0]);

        assert!(xml.contains(r#"<a:p><a:endParaRPr lang="zh-TW" dirty="0"/></a:p>"#));
    }

    #[test]
    fn test_multiline_bullet_uses_line_break() {
        let writer = PptxWriter::new();
        let mut xml = String::new();
        writer.write_bullet(
            &mut xml,
            &Paragraph {
                level: 1,
                ..Paragraph::new("one\ntwo").with_font_size(FontSize::pt(20))
            },
        );

        assert!(xml.starts_with(r#"<a:p><a:pPr lvl="1"/>"#));
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert_eq!(xml.matches("<a:p>").count(), 1);
    }

    #[test]
    fn test_multiline_notes_become_paragraphs() {
        let xml = PptxWriter::new().notes_xml("first\nsecond");

        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert_eq!(xml.matches("<a:p>").count(), 2);
    }

    #[test]
    fn test_package_layout() {
        let deck = sample_deck();
        let bytes = PptxWriter::new()
            .write(&deck, Cursor::new(Vec::new()))
            .unwrap()
            .into_inner();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        for name in [
            "[Content_Types].xml",
            "ppt/presentation.xml",
            "ppt/slides/slide3.xml",
            "ppt/slideLayouts/slideLayout2.xml",
            "ppt/notesMasters/notesMaster1.xml",
            "ppt/notesSlides/notesSlide2.xml",
            "ppt/theme/theme2.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing {}", name);
        }
        assert!(archive.by_name("ppt/notesSlides/notesSlide3.xml").is_err());

        let mut rels = String::new();
        archive
            .by_name("ppt/slides/_rels/slide3.xml.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains("../notesSlides/notesSlide2.xml"));

        let mut slide = String::new();
        archive
            .by_name("ppt/slides/slide3.xml")
            .unwrap()
            .read_to_string(&mut slide)
            .unwrap();
        assert!(slide.contains("<a:t>a &amp; b &lt;c&gt;</a:t>"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/deck.pptx");

        let err = PptxWriter::new().save(&sample_deck(), &path).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
