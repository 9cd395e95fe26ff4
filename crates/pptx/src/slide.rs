//! Slide part serialization.

use crate::package::{PML_NAMESPACES, XML_DECLARATION};
use crate::template::SP_TREE_HEADER;
use deck_core::{Anchor, Error, Font, Line, Paragraph, Result, Rgb, Shape, Slide, TextFrame};
use quick_xml::escape::escape;
use std::borrow::Cow;
use std::fmt::Write as FmtWrite;

/// Shape style of a default PowerPoint auto-shape: outline, fill and effect
/// taken from the theme at accent1, text in light 1.
const AUTO_SHAPE_STYLE: &str = concat!(
    r#"<p:style>"#,
    r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
    r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
    r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#,
    r#"</p:style>"#
);

/// Reject shapes whose extent is negative.
pub(crate) fn validate(slide: &Slide, slide_number: usize) -> Result<()> {
    for (idx, shape) in slide.shapes.iter().enumerate() {
        let f = shape.frame;
        if f.cx < 0 || f.cy < 0 {
            return Err(Error::InvalidGeometry {
                slide: slide_number,
                shape: idx + 1,
                reason: format!("negative extent {}x{}", f.cx, f.cy),
            });
        }
    }
    Ok(())
}

/// Generate the XML of one slide part.
pub fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide.shapes.len() * 1024);
    xml.push_str(XML_DECLARATION);
    write!(xml, "<p:sld {}>", PML_NAMESPACES)?;
    xml.push_str("<p:cSld>");

    if let Some(color) = slide.background {
        xml.push_str("<p:bg><p:bgPr>");
        write_solid_fill(&mut xml, color)?;
        xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
    }

    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_HEADER);
    // Shape id 1 belongs to the tree itself.
    for (idx, shape) in slide.shapes.iter().enumerate() {
        write_shape(&mut xml, shape, idx as u32 + 2)?;
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

fn write_shape(xml: &mut String, shape: &Shape, id: u32) -> Result<()> {
    let text_box = shape.kind.is_text_box();

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        id,
        shape.kind.display_name(),
        id - 1
    )?;
    if text_box {
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    } else {
        xml.push_str("<p:cNvSpPr/>");
    }
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    let f = shape.frame;
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        f.x, f.y, f.cx, f.cy
    )?;
    write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, shape.kind.preset())?;

    match shape.fill {
        Some(color) => write_solid_fill(xml, color)?,
        None if text_box => xml.push_str("<a:noFill/>"),
        None => {}
    }

    match shape.line {
        Line::Solid(color) => {
            xml.push_str("<a:ln>");
            write_solid_fill(xml, color)?;
            xml.push_str("</a:ln>");
        }
        Line::None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
        Line::Default => {}
    }
    xml.push_str("</p:spPr>");

    if !text_box {
        xml.push_str(AUTO_SHAPE_STYLE);
    }

    if let Some(ref tf) = shape.text {
        write_text_body(xml, tf, text_box)?;
    }

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_text_body(xml: &mut String, tf: &TextFrame, text_box: bool) -> Result<()> {
    // Text boxes hug their text from the top, auto-shapes center it.
    let anchor = tf
        .anchor
        .unwrap_or(if text_box { Anchor::Top } else { Anchor::Middle });
    let wrap = if tf.word_wrap { "square" } else { "none" };

    xml.push_str("<p:txBody>");
    write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0" anchor="{}">"#, wrap, anchor.code())?;
    if text_box {
        xml.push_str("<a:spAutoFit/>");
    }
    xml.push_str("</a:bodyPr>");
    xml.push_str("<a:lstStyle/>");

    for p in &tf.paragraphs {
        write_paragraph(xml, p)?;
    }
    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, p: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    if p.alignment.is_some() || p.space_before.is_some() || p.space_after.is_some() {
        xml.push_str("<a:pPr");
        if let Some(align) = p.alignment {
            write!(xml, r#" algn="{}""#, align.code())?;
        }
        xml.push('>');
        if let Some(before) = p.space_before {
            write!(xml, r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#, before.centipoints())?;
        }
        if let Some(after) = p.space_after {
            write!(xml, r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, after.centipoints())?;
        }
        xml.push_str("</a:pPr>");
    }

    if !p.text.is_empty() {
        for (i, line) in p.text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                write_run_properties(xml, "a:rPr", &p.font)?;
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", &p.font)?;
            write!(xml, "<a:t>{}</a:t>", escape_text(line))?;
            xml.push_str("</a:r>");
        }
    }

    write_run_properties(xml, "a:endParaRPr", &p.font)?;
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_properties(xml: &mut String, tag: &str, font: &Font) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;
    if let Some(size) = font.size {
        write!(xml, r#" sz="{}""#, size.centipoints())?;
    }
    if font.bold {
        xml.push_str(r#" b="1""#);
    }
    if font.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0""#);

    match font.color {
        Some(color) => {
            xml.push('>');
            write_solid_fill(xml, color)?;
            write!(xml, "</{}>", tag)?;
        }
        None => xml.push_str("/>"),
    }
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: Rgb) -> Result<()> {
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex())?;
    Ok(())
}

/// Characters XML 1.0 cannot carry at all, even as references.
fn is_forbidden(c: char) -> bool {
    (c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')) || c == '\u{FFFE}' || c == '\u{FFFF}'
}

/// Escape run text. Forbidden characters are dropped and `\r` becomes a
/// character reference, since parsers normalize a literal one to `\n`.
fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = escape(text);
    if !escaped.chars().any(|c| c == '\r' || is_forbidden(c)) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\r' => out.push_str("&#13;"),
            c if is_forbidden(c) => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
