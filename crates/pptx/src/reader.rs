//! PPTX read-back: recovers the structural outline of a written deck.

use crate::package::{resolve_target, PRESENTATION_PART, PRESENTATION_RELS};
use deck_core::{DeckOutline, Error, Presentation, Result, Rgb, ShapeKind, ShapeOutline, SlideOutline};
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

    /// Open and outline the PPTX file at `path`.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<DeckOutline> {
        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file))
    }

    /// Outline a PPTX package from a reader.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<DeckOutline> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let presentation = read_file_from_archive(&mut archive, PRESENTATION_PART)?;
        let rels = read_file_from_archive(&mut archive, PRESENTATION_RELS)?;

        let targets = parse_relationships(&rels)?;
        let index = parse_presentation(&presentation)?;

        let mut outline = DeckOutline {
            slide_width: index.slide_width,
            slide_height: index.slide_height,
            slides: Vec::with_capacity(index.slide_rids.len()),
        };

        for (idx, rid) in index.slide_rids.iter().enumerate() {
            let target = targets
                .get(rid)
                .ok_or_else(|| Error::MissingPart(format!("relationship {} of {}", rid, PRESENTATION_PART)))?;
            let slide_path = resolve_target("ppt", target);
            let content = read_file_from_archive(&mut archive, &slide_path)?;
            let slide = parse_slide(&content, idx + 1)?;
            log::trace!("Read {} ({} shapes)", slide_path, slide.shapes.len());
            outline.slides.push(slide);
        }

        log::debug!("Read {} slides", outline.slides.len());
        Ok(outline)
    }

    /// Read the file at `path` back and check it against `pres`.
    ///
    /// Returns the outline read from disk, or `VerificationError` naming the
    /// first slide or shape that differs.
    pub fn verify<P: AsRef<Path>>(&self, pres: &Presentation, path: P) -> Result<DeckOutline> {
        let outline = self.open(path)?;
        let expected = DeckOutline::from_presentation(pres);
        if let Some(diff) = expected.first_difference(&outline) {
            return Err(Error::VerificationError(diff));
        }
        log::debug!("Verified {} slides", outline.slides.len());
        Ok(outline)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Slide ordering and page size from presentation.xml.
#[derive(Debug, Default)]
struct PresentationIndex {
    slide_rids: Vec<String>,
    slide_width: i64,
    slide_height: i64,
}

fn parse_presentation(xml: &str) -> Result<PresentationIndex> {
    let mut index = PresentationIndex::default();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"sldId" => {
                    // The slide's own `id` is unprefixed; `r:id` points at the part.
                    for attr in e.attributes().flatten() {
                        let key = attr.key.as_ref();
                        if key != b"id" && local_name(key) == b"id" {
                            index.slide_rids.push(String::from_utf8_lossy(&attr.value).to_string());
                        }
                    }
                }
                b"sldSz" => {
                    index.slide_width = int_attr(e, b"cx").unwrap_or_default();
                    index.slide_height = int_attr(e, b"cy").unwrap_or_default();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing presentation: {}", e)));
            }
            _ => {}
        }
    }

    Ok(index)
}

/// Map relationship ids to their targets.
fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut targets = HashMap::new();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if e.name().as_ref() == b"Relationship" => {
                let mut target = String::new();
                let mut id = String::new();

                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Target" => {
                            target = attr
                                .unescape_value()
                                .map(|v| v.to_string())
                                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).to_string());
                        }
                        b"Id" => {
                            id = String::from_utf8_lossy(&attr.value).to_string();
                        }
                        _ => {}
                    }
                }

                if !id.is_empty() {
                    targets.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing relationships: {}", e)));
            }
            _ => {}
        }
    }

    Ok(targets)
}

/// A shape being assembled while its XML is read.
#[derive(Debug, Default)]
struct ShapeInfo {
    text_box: bool,
    preset: Option<String>,
    x: i64,
    y: i64,
    paragraphs: Vec<String>,
}

impl ShapeInfo {
    fn finish(self) -> ShapeOutline {
        ShapeOutline {
            kind: self
                .preset
                .as_deref()
                .and_then(|p| ShapeKind::from_preset(p, self.text_box)),
            x: self.x,
            y: self.y,
            paragraphs: self.paragraphs,
        }
    }
}

/// Parse one slide part into its outline.
fn parse_slide(xml: &str, slide_number: usize) -> Result<SlideOutline> {
    let mut slide = SlideOutline::new(slide_number);
    let mut reader = Reader::from_str(xml);
    // Leading and trailing spaces inside <a:t> are content.
    reader.trim_text(false);

    let mut current_shape: Option<ShapeInfo> = None;
    let mut in_background = false;
    let mut in_text_body = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"bg" => in_background = true,
                b"sp" => current_shape = Some(ShapeInfo::default()),
                b"txBody" => in_text_body = true,
                b"p" if in_text_body => {
                    if let Some(ref mut shape) = current_shape {
                        shape.paragraphs.push(String::new());
                    }
                }
                b"t" if in_text_body => in_text = true,
                b"br" if in_text_body => push_text(&mut current_shape, "\n"),
                other => inspect_element(e, other, &mut current_shape, in_background, &mut slide),
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"p" if in_text_body => {
                    if let Some(ref mut shape) = current_shape {
                        shape.paragraphs.push(String::new());
                    }
                }
                b"br" if in_text_body => push_text(&mut current_shape, "\n"),
                other => inspect_element(e, other, &mut current_shape, in_background, &mut slide),
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|err| Error::XmlError(format!("Bad text on slide {}: {}", slide_number, err)))?;
                    push_text(&mut current_shape, &text);
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"bg" => in_background = false,
                b"sp" => {
                    if let Some(shape) = current_shape.take() {
                        slide.shapes.push(shape.finish());
                    }
                    in_text_body = false;
                    in_text = false;
                }
                b"txBody" => in_text_body = false,
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing slide {}: {}",
                    slide_number, e
                )));
            }
            _ => {}
        }
    }

    Ok(slide)
}

/// Pick up geometry, shape flags and the background color from an element.
fn inspect_element(
    e: &BytesStart<'_>,
    name: &[u8],
    current_shape: &mut Option<ShapeInfo>,
    in_background: bool,
    slide: &mut SlideOutline,
) {
    match name {
        b"srgbClr" if in_background => {
            slide.background = str_attr(e, b"val").and_then(|v| Rgb::from_hex(&v));
        }
        b"cNvSpPr" => {
            if let Some(ref mut shape) = current_shape {
                shape.text_box = str_attr(e, b"txBox").as_deref() == Some("1");
            }
        }
        b"off" => {
            // Only the shape's own transform; the tree's group transform has no shape.
            if let Some(ref mut shape) = current_shape {
                shape.x = int_attr(e, b"x").unwrap_or_default();
                shape.y = int_attr(e, b"y").unwrap_or_default();
            }
        }
        b"prstGeom" => {
            if let Some(ref mut shape) = current_shape {
                shape.preset = str_attr(e, b"prst");
            }
        }
        _ => {}
    }
}

fn push_text(current_shape: &mut Option<ShapeInfo>, text: &str) {
    if let Some(ref mut shape) = current_shape {
        match shape.paragraphs.last_mut() {
            Some(p) => p.push_str(text),
            None => shape.paragraphs.push(text.to_string()),
        }
    }
}

fn str_attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

fn int_attr(e: &BytesStart<'_>, name: &[u8]) -> Option<i64> {
    str_attr(e, name).and_then(|v| v.parse().ok())
}

/// Read a file from the ZIP archive.
fn read_file_from_archive<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::MissingPart(format!("'{}': {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

    Ok(content)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::PptxWriter;
    use deck_core::compose::{add_bullets, add_diagram_box, add_title, BulletStyle};
    use deck_core::{palette, Frame};
    use std::io::Cursor;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_parse_presentation_order() {
        let xml = concat!(
            r#"<p:presentation xmlns:p="p" xmlns:r="r"><p:sldIdLst>"#,
            r#"<p:sldId id="257" r:id="rId7"/><p:sldId id="256" r:id="rId3"/>"#,
            r#"</p:sldIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#
        );
        let index = parse_presentation(xml).unwrap();
        assert_eq!(index.slide_rids, vec!["rId7", "rId3"]);
        assert_eq!(index.slide_width, 9_144_000);
        assert_eq!(index.slide_height, 6_858_000);
    }

    #[test]
    fn test_parse_slide_paragraphs_and_breaks() {
        let xml = concat!(
            r#"<p:sld><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="002D4B"/></a:solidFill></p:bgPr></p:bg>"#,
            r#"<p:spTree><p:grpSpPr/>"#,
            r#"<p:sp><p:nvSpPr><p:cNvSpPr txBox="1"/></p:nvSpPr><p:spPr><a:xfrm><a:off x="10" y="20"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"/></p:spPr><p:txBody><a:bodyPr/>"#,
            r#"<a:p><a:r><a:t>Tom &amp; Jerry</a:t></a:r><a:br/><a:r><a:t> second</a:t></a:r></a:p>"#,
            r#"<a:p><a:endParaRPr/></a:p>"#,
            r#"</p:txBody></p:sp>"#,
            r#"<p:sp><p:spPr><a:prstGeom prst="star5"/></p:spPr></p:sp>"#,
            r#"</p:spTree></p:cSld></p:sld>"#
        );
        let slide = parse_slide(xml, 3).unwrap();

        assert_eq!(slide.number, 3);
        assert_eq!(slide.background, Some(palette::DARK_BLUE));
        assert_eq!(slide.shapes.len(), 2);

        let text = &slide.shapes[0];
        assert_eq!(text.kind, Some(ShapeKind::TextBox));
        assert_eq!((text.x, text.y), (10, 20));
        assert_eq!(text.paragraphs, vec!["Tom & Jerry\n second", ""]);

        assert_eq!(slide.shapes[1].kind, None);
        assert!(slide.shapes[1].paragraphs.is_empty());
    }

    #[test]
    fn test_round_trip_matches_outline() {
        let mut pres = Presentation::standard();
        let slide = pres.add_slide();
        slide.background = Some(palette::WHITE);
        add_title(slide, "FEDERATION", 0.5);
        add_diagram_box(
            slide,
            "Gateway A\n(US-East)",
            Frame::inches(1.0, 3.0, 2.5, 0.9),
            palette::BLUE,
            palette::WHITE,
        );
        let slide = pres.add_slide();
        add_bullets(slide, &["<one>", "two & three"], 1.5, BulletStyle::default());

        let bytes = PptxWriter::new().write(&pres, Cursor::new(Vec::new())).unwrap().into_inner();
        let outline = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(outline.first_difference(&DeckOutline::from_presentation(&pres)), None);
        assert_eq!(outline.slides[1].shapes[0].paragraphs, vec!["• <one>", "• two & three"]);
    }

    #[test]
    fn test_round_trip_keeps_carriage_returns_and_c1_controls() {
        let mut pres = Presentation::standard();
        let slide = pres.add_slide();
        add_bullets(slide, &["a\r\nb", "x\u{85}y"], 1.5, BulletStyle::default());

        let bytes = PptxWriter::new().write(&pres, Cursor::new(Vec::new())).unwrap().into_inner();
        let outline = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(outline.slides[0].shapes[0].paragraphs, vec!["• a\r\nb", "• x\u{85}y"]);
        assert_eq!(outline.first_difference(&DeckOutline::from_presentation(&pres)), None);
    }

    #[test]
    fn test_missing_presentation_part() {
        let mut bytes = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut bytes);
            zip.start_file("hello.txt", zip::write::FileOptions::default()).unwrap();
            zip.finish().unwrap();
        }
        bytes.set_position(0);

        let err = PptxReader::new().read(bytes).unwrap_err();
        assert!(matches!(err, Error::MissingPart(_)));
    }

    #[test]
    fn test_verify_detects_stale_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut pres = Presentation::standard();
        add_title(pres.add_slide(), "SUMMARY", 0.5);
        PptxWriter::new().save(&pres, &path).unwrap();

        let outline = PptxReader::new().verify(&pres, &path).unwrap();
        assert_eq!(outline.slides.len(), 1);

        add_title(pres.add_slide(), "THANK YOU", 0.5);
        let err = PptxReader::new().verify(&pres, &path).unwrap_err();
        match err {
            Error::VerificationError(msg) => assert_eq!(msg, "slide count 2 vs 1"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
