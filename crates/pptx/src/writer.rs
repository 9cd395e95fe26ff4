//! PPTX package writer.

use crate::package::{
    content_type, rel_type, slide_part, slide_rels_part, ContentTypes, Relationships, APP_PROPS_PART,
    CONTENT_TYPES, CORE_PROPS_PART, PACKAGE_RELS, PML_NAMESPACES, PRESENTATION_PART, PRESENTATION_RELS,
    PRES_PROPS_PART, SLIDE_LAYOUT_PART, SLIDE_LAYOUT_RELS, SLIDE_MASTER_PART, SLIDE_MASTER_RELS,
    TABLE_STYLES_PART, THEME_PART, VIEW_PROPS_PART, XML_DECLARATION,
};
use crate::slide::{slide_xml, validate};
use crate::template::{BLANK_LAYOUT_XML, PRES_PROPS_XML, SLIDE_MASTER_XML, TABLE_STYLES_XML, THEME_XML, VIEW_PROPS_XML};
use deck_core::{Error, Presentation, Result};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// First id handed out in `p:sldIdLst`; lower values are reserved.
const FIRST_SLIDE_ID: usize = 256;

/// Writer for PPTX (Office Open XML) packages.
pub struct PptxWriter {
    compression: CompressionMethod,
}

impl PptxWriter {
    /// Create a writer that deflates every part.
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Use a different ZIP compression method.
    pub fn with_compression(mut self, compression: CompressionMethod) -> Self {
        self.compression = compression;
        self
    }

    /// Write `pres` to the file at `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, pres: &Presentation, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("Writing {} slides to {}", pres.len(), path.display());

        let file = File::create(path)?;
        let mut sink = self.write(pres, BufWriter::new(file))?;
        sink.flush()?;
        Ok(())
    }

    /// Serialize `pres` into `sink` and hand the sink back.
    pub fn write<W: Write + Seek>(&self, pres: &Presentation, sink: W) -> Result<W> {
        for (idx, slide) in pres.slides.iter().enumerate() {
            validate(slide, idx + 1)?;
        }

        let mut zip = ZipWriter::new(sink);
        let mut content_types = ContentTypes::new();

        let mut package_rels = Relationships::new();
        package_rels.add(rel_type::OFFICE_DOCUMENT, PRESENTATION_PART);
        package_rels.add(rel_type::CORE_PROPERTIES, CORE_PROPS_PART);
        package_rels.add(rel_type::EXTENDED_PROPERTIES, APP_PROPS_PART);

        // Master first so that slides resolve to rId2..rId(n+1).
        let mut pres_rels = Relationships::new();
        let master_rid = pres_rels.add(rel_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rids: Vec<String> = (1..=pres.len())
            .map(|n| pres_rels.add(rel_type::SLIDE, format!("slides/slide{}.xml", n)))
            .collect();
        pres_rels.add(rel_type::PRES_PROPS, "presProps.xml");
        pres_rels.add(rel_type::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rel_type::THEME, "theme/theme1.xml");
        pres_rels.add(rel_type::TABLE_STYLES, "tableStyles.xml");

        content_types.add_override(PRESENTATION_PART, content_type::PRESENTATION);
        self.put(&mut zip, PRESENTATION_PART, &presentation_xml(pres, &master_rid, &slide_rids)?)?;
        self.put(&mut zip, PRESENTATION_RELS, &pres_rels.to_xml()?)?;

        for (idx, slide) in pres.slides.iter().enumerate() {
            let n = idx + 1;
            let part = slide_part(n);
            let mut rels = Relationships::new();
            rels.add(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            content_types.add_override(&part, content_type::SLIDE);
            self.put(&mut zip, &part, &slide_xml(slide)?)?;
            self.put(&mut zip, &slide_rels_part(n), &rels.to_xml()?)?;
            log::trace!("Wrote {} ({} shapes)", part, slide.shapes.len());
        }

        let mut master_rels = Relationships::new();
        master_rels.add(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rel_type::THEME, "../theme/theme1.xml");
        content_types.add_override(SLIDE_MASTER_PART, content_type::SLIDE_MASTER);
        self.put(&mut zip, SLIDE_MASTER_PART, SLIDE_MASTER_XML)?;
        self.put(&mut zip, SLIDE_MASTER_RELS, &master_rels.to_xml()?)?;

        let mut layout_rels = Relationships::new();
        layout_rels.add(rel_type::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        content_types.add_override(SLIDE_LAYOUT_PART, content_type::SLIDE_LAYOUT);
        self.put(&mut zip, SLIDE_LAYOUT_PART, BLANK_LAYOUT_XML)?;
        self.put(&mut zip, SLIDE_LAYOUT_RELS, &layout_rels.to_xml()?)?;

        for (part, ct, body) in [
            (THEME_PART, content_type::THEME, THEME_XML),
            (PRES_PROPS_PART, content_type::PRES_PROPS, PRES_PROPS_XML),
            (VIEW_PROPS_PART, content_type::VIEW_PROPS, VIEW_PROPS_XML),
            (TABLE_STYLES_PART, content_type::TABLE_STYLES, TABLE_STYLES_XML),
        ] {
            content_types.add_override(part, ct);
            self.put(&mut zip, part, body)?;
        }

        content_types.add_override(CORE_PROPS_PART, content_type::CORE_PROPERTIES);
        content_types.add_override(APP_PROPS_PART, content_type::EXTENDED_PROPERTIES);
        self.put(&mut zip, CORE_PROPS_PART, &core_props_xml(pres)?)?;
        self.put(&mut zip, APP_PROPS_PART, &app_props_xml(pres)?)?;

        self.put(&mut zip, PACKAGE_RELS, &package_rels.to_xml()?)?;
        self.put(&mut zip, CONTENT_TYPES, &content_types.to_xml()?)?;

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// Add one part to the archive.
    fn put<W: Write + Seek>(&self, zip: &mut ZipWriter<W>, name: &str, body: &str) -> Result<()> {
        // A fixed timestamp keeps repeated builds byte-identical.
        let options = FileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default());

        zip.start_file(name, options)
            .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
        zip.write_all(body.as_bytes())?;
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate presentation.xml.
fn presentation_xml(pres: &Presentation, master_rid: &str, slide_rids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_rids.len() * 48);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<p:presentation {} saveSubsetFonts="1">"#, PML_NAMESPACES)?;

    write!(
        xml,
        r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{}"/></p:sldMasterIdLst>"#,
        master_rid
    )?;

    if !slide_rids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (idx, rid) in slide_rids.iter().enumerate() {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, FIRST_SLIDE_ID + idx, rid)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        pres.slide_width, pres.slide_height
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// Generate docProps/core.xml. No timestamps are written.
fn core_props_xml(pres: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    if let Some(ref title) = pres.title {
        write!(xml, "<dc:title>{}</dc:title>", escape(title))?;
    }
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Generate docProps/app.xml.
fn app_props_xml(pres: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    write!(xml, "<Application>{}</Application>", env!("CARGO_PKG_NAME"))?;
    write!(xml, "<Slides>{}</Slides>", pres.len())?;
    xml.push_str("</Properties>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::compose::{add_bullets, add_title, BulletStyle};
    use deck_core::{palette, Frame, Shape, ShapeKind};
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn sample() -> Presentation {
        let mut pres = Presentation::standard().with_title("Sample & Co");
        for title in ["FIRST", "SECOND"] {
            let slide = pres.add_slide();
            slide.background = Some(palette::WHITE);
            add_title(slide, title, 0.5);
            add_bullets(slide, &["a", "b"], 1.5, BulletStyle::default());
        }
        pres
    }

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_contains_required_parts() {
        let bytes = PptxWriter::new().write(&sample(), Cursor::new(Vec::new())).unwrap().into_inner();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();

        for required in [
            CONTENT_TYPES,
            PACKAGE_RELS,
            PRESENTATION_PART,
            PRESENTATION_RELS,
            SLIDE_MASTER_PART,
            SLIDE_LAYOUT_PART,
            THEME_PART,
            CORE_PROPS_PART,
            APP_PROPS_PART,
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(names.contains(&required), "missing {}", required);
        }
        assert!(!names.contains(&"ppt/slides/slide3.xml"));
    }

    #[test]
    fn test_presentation_xml_lists_slides_in_order() {
        let bytes = PptxWriter::new().write(&sample(), Cursor::new(Vec::new())).unwrap().into_inner();
        let xml = part(&bytes, PRESENTATION_PART);

        let first = xml.find(r#"<p:sldId id="256" r:id="rId2"/>"#).unwrap();
        let second = xml.find(r#"<p:sldId id="257" r:id="rId3"/>"#).unwrap();
        assert!(first < second);
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));

        let content_types = part(&bytes, CONTENT_TYPES);
        assert!(content_types.contains("/ppt/slides/slide2.xml"));

        let core = part(&bytes, CORE_PROPS_PART);
        assert!(core.contains("<dc:title>Sample &amp; Co</dc:title>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let writer = PptxWriter::new();
        let a = writer.write(&sample(), Cursor::new(Vec::new())).unwrap().into_inner();
        let b = writer.write(&sample(), Cursor::new(Vec::new())).unwrap().into_inner();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut pres = sample();
        pres.slides[1]
            .push(Shape::new(ShapeKind::RoundedRectangle, Frame::new(0, 0, 100, -5)));

        let err = PptxWriter::new().write(&pres, Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { slide: 2, shape: 3, .. }));
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pptx");

        PptxWriter::new()
            .with_compression(CompressionMethod::Stored)
            .save(&sample(), &path)
            .unwrap();
        let len = std::fs::metadata(&path).unwrap().len();
        assert!(len > 0);
    }
}
