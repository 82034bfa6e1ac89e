// ABOUTME: PPTX generation module for the kidase-slides application
// ABOUTME: Serializes composed slides into a PresentationML package with a blank layout

use crate::errors::{KidaseError, Result};
use crate::render::{PaneSpec, SlideSpec};
use crate::style::{Rgb, SlideStyle};
use log::{debug, info};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

/// Default slide width: 10in.
pub const DEFAULT_SLIDE_WIDTH: u64 = 9_144_000;
/// Slide height override: 5.5in.
pub const DEFAULT_SLIDE_HEIGHT: u64 = 5_029_200;

const NAMESPACES: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const GROUP_SHAPE_PROPERTIES: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

/// An in-memory deck. Slides are only ever appended.
#[derive(Debug, Clone)]
pub struct Presentation {
    slide_width: u64,
    slide_height: u64,
    title: String,
    slides: Vec<String>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDE_WIDTH, DEFAULT_SLIDE_HEIGHT)
    }
}

impl Presentation {
    pub fn new(slide_width: u64, slide_height: u64) -> Self {
        Self {
            slide_width,
            slide_height,
            title: "Kidase".to_string(),
            slides: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slide_width(&self) -> u64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> u64 {
        self.slide_height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Serialized XML of slide `number` (1-based).
    pub fn slide_xml(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.slides.get(i))
            .map(String::as_str)
    }

    /// Append a slide and return its 1-based number.
    pub fn add_slide(&mut self, spec: &SlideSpec<'_>) -> usize {
        self.slides.push(slide_xml(spec));
        self.slides.len()
    }

    /// Write the deck to `output_file`, creating its parent directory.
    pub fn save(&self, output_file: &Path) -> Result<()> {
        if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(KidaseError::FileReadError)?;
        }
        let file = fs::File::create(output_file).map_err(KidaseError::FileReadError)?;
        self.write_to(file)?;
        info!("PPTX file created at {:?}", output_file);
        Ok(())
    }

    /// Write the package to any seekable sink.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let count = self.slides.len();
        info!("Writing PPTX package with {} slides", count);

        write_part(&mut zip, "[Content_Types].xml", &content_types_xml(count))?;
        write_part(&mut zip, "_rels/.rels", PACKAGE_RELS)?;
        write_part(&mut zip, "docProps/app.xml", &app_xml(count))?;
        write_part(&mut zip, "docProps/core.xml", &core_xml(&self.title))?;
        write_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            &presentation_rels_xml(count),
        )?;
        write_part(
            &mut zip,
            "ppt/presentation.xml",
            &presentation_xml(count, self.slide_width, self.slide_height),
        )?;
        write_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
        write_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            SLIDE_MASTER_RELS,
        )?;
        write_part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", &slide_layout_xml())?;
        write_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            SLIDE_LAYOUT_RELS,
        )?;
        write_part(&mut zip, "ppt/theme/theme1.xml", THEME_XML)?;

        for (i, slide) in self.slides.iter().enumerate() {
            let slide_num = i + 1;
            debug!("Writing slide XML: ppt/slides/slide{}.xml", slide_num);
            write_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
                SLIDE_RELS,
            )?;
            write_part(&mut zip, &format!("ppt/slides/slide{}.xml", slide_num), slide)?;
        }

        info!("Finalizing PPTX file");
        zip.finish()?;
        Ok(())
    }
}

fn write_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    zip.start_file(name, FileOptions::default())?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn solid_fill(color: Rgb) -> String {
    format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex())
}

fn run_properties(style: &SlideStyle, color: Rgb) -> String {
    let font = escape(&style.font);
    format!(
        r#"<a:rPr lang="en-US" sz="{sz}" dirty="0">{fill}<a:latin typeface="{font}"/><a:ea typeface="{font}"/><a:cs typeface="{font}"/></a:rPr>"#,
        sz = style.font_size_centipoints(),
        fill = solid_fill(color),
        font = font
    )
}

/// Drop characters XML 1.0 cannot carry.
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|&c| (c == '\t' || c >= '\u{20}') && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        .collect()
}

/// Runs for one paragraph. Line feeds and vertical tabs become `<a:br/>`.
fn runs_xml(pane: &PaneSpec, style: &SlideStyle) -> String {
    let mut xml = String::new();
    for token in &pane.tokens {
        let props = run_properties(style, token.color_or(style.font_color));
        for (i, line) in token.text.split(|c: char| c == '\n' || c == '\u{0B}').enumerate() {
            if i > 0 {
                xml.push_str(&format!("<a:br>{}</a:br>", props));
            }
            let line = xml_safe(line.strip_suffix('\r').unwrap_or(line));
            if !line.is_empty() {
                xml.push_str(&format!("<a:r>{}<a:t>{}</a:t></a:r>", props, escape(&line)));
            }
        }
    }
    xml
}

fn text_box_xml(shape_id: usize, pane: &PaneSpec, style: &SlideStyle) -> String {
    let region = &pane.region;
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {n}" descr="{lang}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom>{fill}<a:ln w="{ln}">{border}</a:ln></p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0"><a:normAutofit/></a:bodyPr><a:lstStyle/><a:p>{runs}<a:endParaRPr lang="en-US" sz="{sz}" dirty="0"/></a:p></p:txBody></p:sp>"#,
        id = shape_id,
        n = shape_id - 1,
        lang = escape(&pane.language),
        x = region.x,
        y = region.y,
        cx = region.width,
        cy = region.height,
        fill = solid_fill(style.background_color),
        ln = style.border_width_emu,
        border = solid_fill(style.border_color),
        runs = runs_xml(pane, style),
        sz = style.font_size_centipoints()
    )
}

fn slide_xml(spec: &SlideSpec<'_>) -> String {
    // Shape id 1 is the group root
    let shapes: String = spec
        .panes
        .iter()
        .enumerate()
        .map(|(i, pane)| text_box_xml(i + 2, pane, spec.style))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {ns}><p:cSld><p:bg><p:bgPr>{bg}<a:effectLst/></p:bgPr></p:bg><p:spTree>{group}{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
        ns = NAMESPACES,
        bg = solid_fill(spec.style.background_color),
        group = GROUP_SHAPE_PROPERTIES,
        shapes = shapes
    )
}

fn content_types_xml(slide_count: usize) -> String {
    let slides: String = (1..=slide_count)
        .map(|n| {
            format!(
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                n
            )
        })
        .collect::<Vec<String>>()
        .join("\n    ");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
    {slides}
</Types>"#,
        slides = slides
    )
}

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

fn app_xml(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>kidase-slides</Application>
    <Slides>{}</Slides>
</Properties>"#,
        slide_count
    )
}

fn core_xml(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>kidase-slides</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        escape(title),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}

/// Slides take rId1..=N; the master and theme follow.
fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for n in 1..=slide_count {
        rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            n, n
        ));
        rels.push('\n');
    }
    rels.push_str(&format!(
        r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>
</Relationships>"#,
        slide_count + 1,
        slide_count + 2
    ));
    rels
}

fn presentation_xml(slide_count: usize, cx: u64, cy: u64) -> String {
    let slide_ids = (1..=slide_count)
        .map(|n| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, n))
        .collect::<Vec<String>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {ns} saveSubsetFonts="1">
    <p:sldMasterIdLst>
        <p:sldMasterId id="2147483648" r:id="rId{master}"/>
    </p:sldMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        ns = NAMESPACES,
        master = slide_count + 1,
        slide_ids = slide_ids,
        cx = cx,
        cy = cy
    )
}

fn slide_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster {ns}><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>{group}</p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#,
        ns = NAMESPACES,
        group = GROUP_SHAPE_PROPERTIES
    )
}

fn slide_layout_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout {ns} type="blank" preserve="1"><p:cSld name="Blank"><p:spTree>{group}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        ns = NAMESPACES,
        group = GROUP_SHAPE_PROPERTIES
    )
}

const SLIDE_MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>"#;

const SLIDE_LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#;

const SLIDE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#;

const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Kidase"><a:themeElements>
<a:clrScheme name="Kidase"><a:dk1><a:srgbClr val="000000"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="1F1F1F"/></a:dk2><a:lt2><a:srgbClr val="EEECE1"/></a:lt2><a:accent1><a:srgbClr val="FF0000"/></a:accent1><a:accent2><a:srgbClr val="00B050"/></a:accent2><a:accent3><a:srgbClr val="FFC000"/></a:accent3><a:accent4><a:srgbClr val="4F81BD"/></a:accent4><a:accent5><a:srgbClr val="8064A2"/></a:accent5><a:accent6><a:srgbClr val="F79646"/></a:accent6><a:hlink><a:srgbClr val="0000FF"/></a:hlink><a:folHlink><a:srgbClr val="800080"/></a:folHlink></a:clrScheme>
<a:fontScheme name="Kidase"><a:majorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme>
<a:fmtScheme name="Kidase"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme>
</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SlideRegion;
    use crate::tokenizer::Token;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn pane(language: &str, tokens: Vec<Token>) -> PaneSpec {
        PaneSpec {
            language: language.to_string(),
            region: SlideRegion {
                x: 10,
                y: 20,
                width: 300,
                height: 400,
            },
            tokens,
        }
    }

    #[test]
    fn test_slide_xml_colors_runs() {
        let style = SlideStyle::default();
        let spec = SlideSpec {
            row_index: 0,
            panes: vec![pane(
                "english",
                vec![Token::marker("፠ Priest:", Rgb::RED), Token::plain(" Peace & joy")],
            )],
            style: &style,
        };
        let xml = slide_xml(&spec);
        assert!(xml.contains(r#"<a:off x="10" y="20"/><a:ext cx="300" cy="400"/>"#));
        assert!(xml.contains(r#"<a:srgbClr val="FF0000"/></a:solidFill><a:latin typeface="Arial"/>"#));
        assert!(xml.contains("<a:t>፠ Priest:</a:t>"));
        assert!(xml.contains("<a:t> Peace &amp; joy</a:t>"));
        assert!(xml.contains(r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="FFFFFF"/>"#));
        assert!(xml.contains(r#"<p:bgPr><a:solidFill><a:srgbClr val="000000"/>"#));
        assert!(xml.contains(r#"sz="2400""#));
    }

    #[test]
    fn test_empty_pane_has_box_but_no_runs() {
        let style = SlideStyle::default();
        let spec = SlideSpec {
            row_index: 0,
            panes: vec![pane("ትግርኛ", Vec::new())],
            style: &style,
        };
        let xml = slide_xml(&spec);
        assert!(xml.contains(r#"descr="ትግርኛ""#));
        assert!(xml.contains("<a:ln w=\"12700\">"));
        assert!(!xml.contains("<a:r>"));
        assert!(xml.contains("<a:endParaRPr"));
    }

    #[test]
    fn test_line_feeds_become_breaks() {
        let style = SlideStyle::default();
        let xml = runs_xml(&pane("english", vec![Token::plain("one\r\ntwo\n")]), &style);
        assert_eq!(xml.matches("<a:br>").count(), 2);
        assert!(xml.contains("<a:t>one</a:t>"));
        assert!(xml.contains("<a:t>two</a:t>"));
        assert!(!xml.contains('\r'));
    }

    #[test]
    fn test_xml_illegal_characters_dropped() {
        let style = SlideStyle::default();
        let text = "a\u{0}b\u{1F}c\u{FFFE}d\u{FFFF}e\tf\u{FFFD}";
        let xml = runs_xml(&pane("english", vec![Token::plain(text)]), &style);
        assert!(xml.contains("<a:t>abcde\tf\u{FFFD}</a:t>"));
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("out").join("deck").join("kidase.pptx");
        Presentation::default().save(&target).unwrap();
        assert!(target.is_file());
        let archive = ZipArchive::new(fs::File::open(&target).unwrap()).unwrap();
        assert!(archive.file_names().any(|n| n == "ppt/presentation.xml"));
    }

    #[test]
    fn test_package_parts() {
        let style = SlideStyle::default();
        let mut deck = Presentation::default().with_title("Kidase <Sunday>");
        for _ in 0..2 {
            let spec = SlideSpec {
                row_index: 0,
                panes: vec![pane("english", vec![Token::plain("Amen")])],
                style: &style,
            };
            deck.add_slide(&spec);
        }

        let mut buffer = Cursor::new(Vec::new());
        deck.write_to(&mut buffer).unwrap();
        buffer.set_position(0);
        let mut archive = ZipArchive::new(buffer).unwrap();

        for name in [
            "[Content_Types].xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing {}", name);
        }

        let mut presentation = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut presentation)
            .unwrap();
        assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="5029200"/>"#));
        assert!(presentation.contains(r#"<p:sldMasterId id="2147483648" r:id="rId3"/>"#));

        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("<dc:title>Kidase &lt;Sunday&gt;</dc:title>"));
    }

    #[test]
    fn test_slide_xml_lookup_is_one_based() {
        let deck = Presentation::default();
        assert!(deck.slide_xml(0).is_none());
        assert!(deck.slide_xml(1).is_none());
    }
}
