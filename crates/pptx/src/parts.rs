//! Package parts of a minimal PresentationML document.
//!
//! Static parts (theme, slide master, the two layouts, notes master, and
//! document properties) are constants. Parts whose content depends on the
//! number of slides are generated here.

use deckgen_core::Layout;

pub(crate) const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(crate) const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Relationship type URIs.
pub(crate) mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const NOTES_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
    pub const NOTES_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
    pub const THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

/// Content type strings used in `[Content_Types].xml`.
mod content_types {
    pub const RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const NOTES_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml";
    pub const NOTES_SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    pub const CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const APP: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

/// Slide size: 10in x 7.5in in EMU.
pub(crate) const SLIDE_WIDTH: i64 = 9_144_000;
pub(crate) const SLIDE_HEIGHT: i64 = 6_858_000;

/// Fixed relationship IDs in `ppt/_rels/presentation.xml.rels`; slides follow.
const RID_SLIDE_MASTER: usize = 1;
const RID_NOTES_MASTER: usize = 2;
const RID_THEME: usize = 3;
const RID_PRES_PROPS: usize = 4;
const RID_VIEW_PROPS: usize = 5;
const RID_TABLE_STYLES: usize = 6;
const FIRST_SLIDE_RID: usize = 7;

/// Slide IDs in `sldIdLst` must be at least 256.
const FIRST_SLIDE_ID: usize = 256;

/// A single relationship entry.
pub(crate) struct Relationship<'a> {
    pub id: String,
    pub rel_type: &'a str,
    pub target: String,
}

impl<'a> Relationship<'a> {
    fn new(rid: usize, rel_type: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: format!("rId{}", rid),
            rel_type,
            target: target.into(),
        }
    }
}

/// Serialize a relationships part.
pub(crate) fn relationships_xml(rels: &[Relationship<'_>]) -> String {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for rel in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id, rel.rel_type, rel.target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// `[Content_Types].xml` for a deck whose notes slides are `notes_count` long.
pub(crate) fn content_types_xml(slide_count: usize, notes_count: usize) -> String {
    use content_types::*;

    let mut xml = String::with_capacity(2048 + (slide_count + notes_count) * 160);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(&format!(r#"<Default Extension="rels" ContentType="{}"/>"#, RELS));
    xml.push_str(&format!(r#"<Default Extension="xml" ContentType="{}"/>"#, XML));

    let mut overrides = vec![
        ("/ppt/presentation.xml".to_string(), PRESENTATION),
        ("/ppt/slideMasters/slideMaster1.xml".to_string(), SLIDE_MASTER),
        ("/ppt/notesMasters/notesMaster1.xml".to_string(), NOTES_MASTER),
        ("/ppt/theme/theme1.xml".to_string(), THEME),
        ("/ppt/theme/theme2.xml".to_string(), THEME),
        ("/ppt/presProps.xml".to_string(), PRES_PROPS),
        ("/ppt/viewProps.xml".to_string(), VIEW_PROPS),
        ("/ppt/tableStyles.xml".to_string(), TABLE_STYLES),
        ("/docProps/core.xml".to_string(), CORE),
        ("/docProps/app.xml".to_string(), APP),
    ];
    for layout in [Layout::Title, Layout::TitleAndContent] {
        overrides.push((format!("/{}", layout_part(layout)), SLIDE_LAYOUT));
    }
    for n in 1..=slide_count {
        overrides.push((format!("/{}", slide_part(n)), SLIDE));
    }
    for n in 1..=notes_count {
        overrides.push((format!("/{}", notes_part(n)), NOTES_SLIDE));
    }

    for (part, content_type) in overrides {
        xml.push_str(&format!(
            r#"<Override PartName="{}" ContentType="{}"/>"#,
            part, content_type
        ));
    }
    xml.push_str("</Types>");
    xml
}

/// Package-level relationships (`_rels/.rels`).
pub(crate) fn package_rels_xml() -> String {
    relationships_xml(&[
        Relationship::new(1, rel_types::OFFICE_DOCUMENT, "ppt/presentation.xml"),
        Relationship::new(2, rel_types::CORE_PROPERTIES, "docProps/core.xml"),
        Relationship::new(3, rel_types::EXTENDED_PROPERTIES, "docProps/app.xml"),
    ])
}

/// `ppt/presentation.xml` listing `slide_count` slides.
pub(crate) fn presentation_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        NS_A, NS_R, NS_P
    ));
    xml.push_str(&format!(
        r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId{}"/></p:sldMasterIdLst>"#,
        RID_SLIDE_MASTER
    ));
    xml.push_str(&format!(
        r#"<p:notesMasterIdLst><p:notesMasterId r:id="rId{}"/></p:notesMasterIdLst>"#,
        RID_NOTES_MASTER
    ));
    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for i in 0..slide_count {
            xml.push_str(&format!(
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + i,
                FIRST_SLIDE_RID + i
            ));
        }
        xml.push_str("</p:sldIdLst>");
    }
    xml.push_str(&format!(
        r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
        SLIDE_WIDTH, SLIDE_HEIGHT
    ));
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    xml
}

/// `ppt/_rels/presentation.xml.rels`.
pub(crate) fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = vec![
        Relationship::new(
            RID_SLIDE_MASTER,
            rel_types::SLIDE_MASTER,
            "slideMasters/slideMaster1.xml",
        ),
        Relationship::new(
            RID_NOTES_MASTER,
            rel_types::NOTES_MASTER,
            "notesMasters/notesMaster1.xml",
        ),
        Relationship::new(RID_THEME, rel_types::THEME, "theme/theme1.xml"),
        Relationship::new(RID_PRES_PROPS, rel_types::PRES_PROPS, "presProps.xml"),
        Relationship::new(RID_VIEW_PROPS, rel_types::VIEW_PROPS, "viewProps.xml"),
        Relationship::new(RID_TABLE_STYLES, rel_types::TABLE_STYLES, "tableStyles.xml"),
    ];
    for i in 0..slide_count {
        rels.push(Relationship::new(
            FIRST_SLIDE_RID + i,
            rel_types::SLIDE,
            format!("slides/slide{}.xml", i + 1),
        ));
    }
    relationships_xml(&rels)
}

/// Relationships of slide `n`: its layout and, if present, its notes slide.
pub(crate) fn slide_rels_xml(layout: Layout, notes_number: Option<usize>) -> String {
    let mut rels = vec![Relationship::new(
        1,
        rel_types::SLIDE_LAYOUT,
        format!("../slideLayouts/slideLayout{}.xml", layout.index()),
    )];
    if let Some(n) = notes_number {
        rels.push(Relationship::new(
            2,
            rel_types::NOTES_SLIDE,
            format!("../notesSlides/notesSlide{}.xml", n),
        ));
    }
    relationships_xml(&rels)
}

/// Relationships of a notes slide: the notes master and its slide.
pub(crate) fn notes_rels_xml(slide_number: usize) -> String {
    relationships_xml(&[
        Relationship::new(1, rel_types::NOTES_MASTER, "../notesMasters/notesMaster1.xml"),
        Relationship::new(
            2,
            rel_types::SLIDE,
            format!("../slides/slide{}.xml", slide_number),
        ),
    ])
}

pub(crate) fn slide_master_rels_xml() -> String {
    relationships_xml(&[
        Relationship::new(
            1,
            rel_types::SLIDE_LAYOUT,
            format!("../slideLayouts/slideLayout{}.xml", Layout::Title.index()),
        ),
        Relationship::new(
            2,
            rel_types::SLIDE_LAYOUT,
            format!(
                "../slideLayouts/slideLayout{}.xml",
                Layout::TitleAndContent.index()
            ),
        ),
        Relationship::new(3, rel_types::THEME, "../theme/theme1.xml"),
    ])
}

pub(crate) fn slide_layout_rels_xml() -> String {
    relationships_xml(&[Relationship::new(
        1,
        rel_types::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )])
}

pub(crate) fn notes_master_rels_xml() -> String {
    relationships_xml(&[Relationship::new(1, rel_types::THEME, "../theme/theme2.xml")])
}

pub(crate) fn slide_part(n: usize) -> String {
    format!("ppt/slides/slide{}.xml", n)
}

pub(crate) fn slide_rels_part(n: usize) -> String {
    format!("ppt/slides/_rels/slide{}.xml.rels", n)
}

pub(crate) fn notes_part(n: usize) -> String {
    format!("ppt/notesSlides/notesSlide{}.xml", n)
}

pub(crate) fn notes_rels_part(n: usize) -> String {
    format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", n)
}

pub(crate) fn layout_part(layout: Layout) -> String {
    format!("ppt/slideLayouts/slideLayout{}.xml", layout.index())
}

pub(crate) fn layout_rels_part(layout: Layout) -> String {
    format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", layout.index())
}

/// The empty group-shape header every `spTree` starts with.
pub(crate) const SP_TREE_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

const CLR_MAP: &str = concat!(
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
    r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
    r#"hlink="hlink" folHlink="folHlink"/>"#,
);

/// A placeholder shape with a fixed position and prompt text.
fn placeholder_sp(id: u32, name: &str, ph: &str, off: (i64, i64), ext: (i64, i64), body: &str) -> String {
    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
            r#"<p:txBody>{body}</p:txBody></p:sp>"#,
        ),
        id = id,
        name = name,
        ph = ph,
        x = off.0,
        y = off.1,
        cx = ext.0,
        cy = ext.1,
        body = body,
    )
}

fn prompt_body(lst_style: &str, prompt: &str) -> String {
    format!(
        r#"<a:bodyPr/><a:lstStyle>{}</a:lstStyle><a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p>"#,
        lst_style, prompt
    )
}

pub(crate) fn slide_master_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    ));
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(SP_TREE_HEADER);
    xml.push_str(&placeholder_sp(
        2,
        "Title Placeholder 1",
        r#"<p:ph type="title"/>"#,
        (457_200, 274_638),
        (8_229_600, 1_143_000),
        &prompt_body("", "Click to edit Master title style"),
    ));
    xml.push_str(&placeholder_sp(
        3,
        "Text Placeholder 2",
        r#"<p:ph type="body" idx="1"/>"#,
        (457_200, 1_600_200),
        (8_229_600, 4_525_963),
        &prompt_body("", "Click to edit Master text styles"),
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(CLR_MAP);
    xml.push_str(concat!(
        "<p:sldLayoutIdLst>",
        r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#,
        r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#,
        "</p:sldLayoutIdLst>",
    ));
    xml.push_str(concat!(
        "<p:txStyles>",
        r#"<p:titleStyle><a:lvl1pPr algn="ctr"><a:defRPr sz="4400" kern="1200">"#,
        r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/>"#,
        "</a:defRPr></a:lvl1pPr></p:titleStyle>",
        r#"<p:bodyStyle><a:lvl1pPr marL="342900" indent="-342900" algn="l">"#,
        r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef>"#,
        r#"<a:buFont typeface="Arial"/><a:buChar char="•"/>"#,
        r#"<a:defRPr sz="3200" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/>"#,
        "</a:defRPr></a:lvl1pPr></p:bodyStyle>",
        r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr></p:otherStyle>"#,
        "</p:txStyles>",
    ));
    xml.push_str("</p:sldMaster>");
    xml
}

/// Layout part for one of the two built-in layouts.
pub(crate) fn slide_layout_xml(layout: Layout) -> String {
    let (layout_type, name, shapes) = match layout {
        Layout::Title => (
            "title",
            "Title Slide",
            [
                placeholder_sp(
                    2,
                    "Title 1",
                    r#"<p:ph type="ctrTitle"/>"#,
                    (685_800, 2_130_425),
                    (7_772_400, 1_470_025),
                    &prompt_body("", "Click to edit Master title style"),
                ),
                placeholder_sp(
                    3,
                    "Subtitle 2",
                    r#"<p:ph type="subTitle" idx="1"/>"#,
                    (1_371_600, 3_886_200),
                    (6_400_800, 1_752_600),
                    &prompt_body(
                        r#"<a:lvl1pPr marL="0" indent="0" algn="ctr"><a:buNone/></a:lvl1pPr>"#,
                        "Click to edit Master subtitle style",
                    ),
                ),
            ],
        ),
        Layout::TitleAndContent => (
            "obj",
            "Title and Content",
            [
                placeholder_sp(
                    2,
                    "Title 1",
                    r#"<p:ph type="title"/>"#,
                    (457_200, 274_638),
                    (8_229_600, 1_143_000),
                    &prompt_body("", "Click to edit Master title style"),
                ),
                placeholder_sp(
                    3,
                    "Content Placeholder 2",
                    r#"<p:ph idx="1"/>"#,
                    (457_200, 1_600_200),
                    (8_229_600, 4_525_963),
                    &prompt_body("", "Click to edit Master text styles"),
                ),
            ],
        ),
    };

    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="{}" preserve="1">"#,
        NS_A, NS_R, NS_P, layout_type
    ));
    xml.push_str(&format!(r#"<p:cSld name="{}"><p:spTree>"#, name));
    xml.push_str(SP_TREE_HEADER);
    for shape in &shapes {
        xml.push_str(shape);
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

pub(crate) fn notes_master_xml() -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        r#"<p:notesMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    ));
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(SP_TREE_HEADER);
    xml.push_str(concat!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#,
        r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#,
        r#"<p:nvPr><p:ph type="sldImg" idx="2"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr><a:xfrm><a:off x="1143000" y="685800"/><a:ext cx="4572000" cy="3429000"/></a:xfrm>"#,
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr></p:sp>"#,
    ));
    xml.push_str(&placeholder_sp(
        3,
        "Notes Placeholder 2",
        r#"<p:ph type="body" sz="quarter" idx="3"/>"#,
        (685_800, 4_343_400),
        (5_486_400, 4_114_800),
        &prompt_body("", "Click to edit Master text styles"),
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(CLR_MAP);
    xml.push_str("</p:notesMaster>");
    xml
}

pub(crate) fn pres_props_xml() -> String {
    format!(
        r#"{}<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
        XML_DECL, NS_A, NS_R, NS_P
    )
}

pub(crate) fn view_props_xml() -> String {
    format!(
        concat!(
            r#"{}<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#,
        ),
        XML_DECL, NS_A, NS_R, NS_P
    )
}

pub(crate) fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECL, NS_A
    )
}

pub(crate) fn core_props_xml(title: &str) -> String {
    format!(
        concat!(
            r#"{}<cp:coreProperties "#,
            r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
            r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{}</dc:title><cp:revision>1</cp:revision>",
            "</cp:coreProperties>",
        ),
        XML_DECL, title
    )
}

pub(crate) fn app_props_xml(slide_count: usize, notes_count: usize) -> String {
    format!(
        concat!(
            r#"{}<Properties "#,
            r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{}</Application><PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
            "<Slides>{}</Slides><Notes>{}</Notes>",
            "</Properties>",
        ),
        XML_DECL,
        env!("CARGO_PKG_NAME"),
        slide_count,
        notes_count
    )
}

/// Office theme shared by the slide master (theme1) and notes master (theme2).
pub(crate) fn theme_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(r#"<a:theme xmlns:a="{}" name="Office Theme">"#, NS_A));
    xml.push_str("<a:themeElements>");
    xml.push_str(concat!(
        r#"<a:clrScheme name="Office">"#,
        r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
        r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
        r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#,
        r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
        r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#,
        r#"<a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
        r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3>"#,
        r#"<a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
        r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5>"#,
        r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
        r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#,
        r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
        "</a:clrScheme>",
    ));
    xml.push_str(concat!(
        r#"<a:fontScheme name="Office">"#,
        r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/>"#,
        r#"<a:font script="Hant" typeface="新細明體"/></a:majorFont>"#,
        r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/>"#,
        r#"<a:font script="Hant" typeface="新細明體"/></a:minorFont>"#,
        "</a:fontScheme>",
    ));
    xml.push_str(r#"<a:fmtScheme name="Office"><a:fillStyleLst>"#);
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for width in [9525, 25400, 38100] {
        xml.push_str(&format!(
            concat!(
                r#"<a:ln w="{}" cap="flat" cmpd="sng" algn="ctr">"#,
                r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
                r#"<a:prstDash val="solid"/></a:ln>"#,
            ),
            width
        ));
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme>");
    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_lists_every_slide() {
        let xml = content_types_xml(3, 2);

        assert!(xml.contains(r#"PartName="/ppt/slides/slide3.xml""#));
        assert!(!xml.contains("slide4.xml"));
        assert!(xml.contains(r#"PartName="/ppt/notesSlides/notesSlide2.xml""#));
        assert!(!xml.contains("notesSlide3.xml"));
        assert!(xml.contains(r#"PartName="/ppt/slideLayouts/slideLayout2.xml""#));
    }

    #[test]
    fn test_presentation_slide_ids() {
        let xml = presentation_xml(2);

        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId7"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId8"/>"#));
        assert!(xml.contains(r#"<p:notesMasterId r:id="rId2"/>"#));
    }

    #[test]
    fn test_empty_presentation_has_no_slide_list() {
        assert!(!presentation_xml(0).contains("sldIdLst"));
    }

    #[test]
    fn test_presentation_rels_match_slide_ids() {
        let xml = presentation_rels_xml(2);

        assert!(xml.contains(r#"Id="rId7" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(xml.contains(r#"Target="slides/slide2.xml""#));
        assert!(xml.contains(r#"Target="notesMasters/notesMaster1.xml""#));
    }

    #[test]
    fn test_slide_rels() {
        let with_notes = slide_rels_xml(Layout::TitleAndContent, Some(4));
        assert!(with_notes.contains("../slideLayouts/slideLayout2.xml"));
        assert!(with_notes.contains("../notesSlides/notesSlide4.xml"));

        let without = slide_rels_xml(Layout::Title, None);
        assert!(without.contains("../slideLayouts/slideLayout1.xml"));
        assert!(!without.contains("notesSlide"));
    }

    #[test]
    fn test_layouts_carry_expected_placeholders() {
        let title = slide_layout_xml(Layout::Title);
        assert!(title.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(title.contains(r#"<p:ph type="subTitle" idx="1"/>"#));

        let content = slide_layout_xml(Layout::TitleAndContent);
        assert!(content.contains(r#"type="obj""#));
        assert!(content.contains(r#"<p:ph idx="1"/>"#));
    }
}
