//! PPTX file reader implementation.
//!
//! Loads a package written by [`crate::PptxWriter`] back into a [`Deck`].

use deckgen_core::{Deck, Error, FontSize, Layout, Paragraph, Result, Slide, SlideBody};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Reader for PPTX (Office Open XML) files.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a PPTX file from disk.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Deck> {
        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file))
    }

    /// Read a PPTX package from a reader.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<Deck> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut deck = Deck::new();
        for slide_path in self.slide_order(&mut archive)? {
            let slide = self.read_slide(&mut archive, &slide_path)?;
            log::debug!("Read {}: {}", slide_path, slide.title);
            deck.slides.push(slide);
        }

        Ok(deck)
    }

    /// Slide part paths in `sldIdLst` order.
    fn slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let presentation = read_part(archive, "ppt/presentation.xml")?;
        let rels = parse_relationships(&read_part(archive, "ppt/_rels/presentation.xml.rels")?)?;

        let mut ids = Vec::new();
        let mut reader = Reader::from_str(&presentation);
        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if local_name(e.name().as_ref()) == b"sldId" =>
                {
                    if let Some(id) = attribute(e, b"r:id") {
                        ids.push(id);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing presentation.xml: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        ids.iter()
            .map(|id| {
                rels.get(id)
                    .map(|rel| resolve_target("ppt", &rel.target))
                    .ok_or_else(|| Error::CorruptedFile(format!("No relationship for slide {}", id)))
            })
            .collect()
    }

    /// Read one slide, its layout, and its notes.
    fn read_slide<R: Read + Seek>(&self, archive: &mut ZipArchive<R>, slide_path: &str) -> Result<Slide> {
        let (dir, file_name) = slide_path.rsplit_once('/').unwrap_or(("", slide_path));
        let rels_path = format!("{}/_rels/{}.rels", dir, file_name);
        let rels = match read_part(archive, &rels_path) {
            Ok(content) => parse_relationships(&content)?,
            Err(_) => HashMap::new(),
        };

        let shapes = extract_placeholders(&read_part(archive, slide_path)?)?;

        let layout_from_rels = rels
            .values()
            .find(|rel| rel.rel_type.ends_with("/slideLayout"))
            .and_then(|rel| trailing_number(&rel.target))
            .and_then(Layout::from_index);
        let layout = layout_from_rels.unwrap_or_else(|| {
            if shapes.iter().any(|s| s.kind() == PlaceholderKind::Subtitle) {
                Layout::Title
            } else {
                Layout::TitleAndContent
            }
        });

        let title = shapes
            .iter()
            .find(|s| s.kind() == PlaceholderKind::Title)
            .map(|s| s.text())
            .unwrap_or_default();

        let body = match layout {
            Layout::Title => SlideBody::Subtitle(
                shapes
                    .iter()
                    .find(|s| s.kind() == PlaceholderKind::Subtitle)
                    .map(|s| s.text())
                    .unwrap_or_default(),
            ),
            Layout::TitleAndContent => SlideBody::Bullets(
                shapes
                    .into_iter()
                    .find(|s| s.kind() == PlaceholderKind::Body)
                    .map(|s| s.paragraphs)
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| vec![Paragraph::default()]),
            ),
        };

        let notes_path = rels
            .values()
            .find(|rel| rel.rel_type.ends_with("/notesSlide"))
            .map(|rel| resolve_target(dir, &rel.target));
        let notes = match notes_path {
            Some(path) => extract_placeholders(&read_part(archive, &path)?)?
                .into_iter()
                .find(|s| s.kind() == PlaceholderKind::Body)
                .map(|s| s.text())
                .filter(|t| !t.is_empty()),
            None => None,
        };

        Ok(Slide {
            layout,
            title,
            body,
            notes,
        })
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// A relationship target and type.
#[derive(Debug)]
struct Rel {
    rel_type: String,
    target: String,
}

/// Parse a relationships part into a map keyed by relationship ID.
fn parse_relationships(xml: &str) -> Result<HashMap<String, Rel>> {
    let mut rels = HashMap::new();
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if e.name().as_ref() == b"Relationship" => {
                let id = attribute(e, b"Id").unwrap_or_default();
                let rel_type = attribute(e, b"Type").unwrap_or_default();
                let target = attribute(e, b"Target").unwrap_or_default();
                rels.insert(id, Rel { rel_type, target });
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing relationships: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(rels)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceholderKind {
    Title,
    Subtitle,
    Body,
    Other,
}

/// A placeholder shape: its `ph` attributes and text paragraphs.
#[derive(Debug, Default)]
struct PlaceholderShape {
    ph_type: Option<String>,
    ph_idx: Option<String>,
    paragraphs: Vec<Paragraph>,
}

impl PlaceholderShape {
    fn kind(&self) -> PlaceholderKind {
        match self.ph_type.as_deref() {
            Some("title") | Some("ctrTitle") => PlaceholderKind::Title,
            Some("subTitle") => PlaceholderKind::Subtitle,
            Some("body") | Some("obj") => PlaceholderKind::Body,
            None if self.ph_idx.is_some() => PlaceholderKind::Body,
            _ => PlaceholderKind::Other,
        }
    }

    /// Paragraph texts joined by newlines.
    fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Extract placeholder shapes and their paragraphs from slide or notes XML.
fn extract_placeholders(xml: &str) -> Result<Vec<PlaceholderShape>> {
    let mut shapes = Vec::new();
    let mut reader = Reader::from_str(xml);

    let mut current_shape: Option<PlaceholderShape> = None;
    let mut current_paragraph: Option<Paragraph> = None;
    let mut in_text_body = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => current_shape = Some(PlaceholderShape::default()),
                b"txBody" => in_text_body = true,
                b"p" if in_text_body => current_paragraph = Some(Paragraph::default()),
                b"t" if current_paragraph.is_some() => in_text = true,
                b"pPr" | b"rPr" | b"endParaRPr" => {
                    apply_paragraph_attrs(current_paragraph.as_mut(), e)
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"ph" => {
                    if let Some(shape) = current_shape.as_mut() {
                        shape.ph_type = attribute(e, b"type");
                        shape.ph_idx = attribute(e, b"idx");
                    }
                }
                b"p" if in_text_body => {
                    if let Some(shape) = current_shape.as_mut() {
                        shape.paragraphs.push(Paragraph::default());
                    }
                }
                b"br" => {
                    if let Some(p) = current_paragraph.as_mut() {
                        p.text.push('\n');
                    }
                }
                b"pPr" | b"rPr" | b"endParaRPr" => {
                    apply_paragraph_attrs(current_paragraph.as_mut(), e)
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(p) = current_paragraph.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| Error::XmlError(format!("Bad text node: {}", e)))?;
                        p.text.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => {
                    if let Some(shape) = current_shape.take() {
                        if shape.ph_type.is_some() || shape.ph_idx.is_some() {
                            shapes.push(shape);
                        }
                    }
                    in_text_body = false;
                }
                b"txBody" => in_text_body = false,
                b"p" => {
                    if let (Some(shape), Some(p)) = (current_shape.as_mut(), current_paragraph.take()) {
                        shape.paragraphs.push(p);
                    }
                }
                b"t" => in_text = false,
                b"br" => {
                    if let Some(p) = current_paragraph.as_mut() {
                        p.text.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    Ok(shapes)
}

/// Record `lvl` from `pPr` and the first `sz` seen on a run.
fn apply_paragraph_attrs(paragraph: Option<&mut Paragraph>, e: &BytesStart<'_>) {
    let Some(p) = paragraph else {
        return;
    };
    if let Some(level) = attribute(e, b"lvl").and_then(|v| v.parse().ok()) {
        p.level = level;
    }
    if p.font_size.is_none() {
        if let Some(size) = attribute(e, b"sz").and_then(|v| v.parse().ok()) {
            p.font_size = Some(FontSize::from_centipoints(size));
        }
    }
}

/// Unescaped value of an attribute, by qualified name.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Read a part from the ZIP archive.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

    Ok(content)
}

/// Resolve a relationship target against the directory of its source part.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." | "" => {}
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a trailing number from a part name like "slideLayout2.xml".
fn trailing_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}
