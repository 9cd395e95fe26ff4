//! Drawing primitives used to lay out the deck.
//!
//! Each helper appends shapes to a slide with fixed house styling. All
//! coordinates are in inches, measured from the top-left corner of the page.

use crate::color::{palette, Rgb};
use crate::types::{Alignment, Anchor, Frame, Line, Paragraph, Shape, ShapeKind, Slide, TextFrame};
use crate::units::pt;

/// Marker placed in front of every bullet item.
pub const BULLET: &str = "• ";

/// Set a solid background color on the slide.
pub fn set_background(slide: &mut Slide, color: Rgb) {
    slide.background = Some(color);
}

/// Add an empty text box and return its text frame.
pub fn add_text_box(slide: &mut Slide, left: f64, top: f64, width: f64, height: f64) -> &mut TextFrame {
    slide
        .push(Shape::text_box(Frame::inches(left, top, width, height)))
        .text_frame()
}

/// Add an auto-shape with a solid fill and the theme outline.
pub fn add_filled(slide: &mut Slide, kind: ShapeKind, frame: Frame, fill: Rgb) -> &mut Shape {
    slide.push(Shape::new(kind, frame).with_fill(fill))
}

/// Text placed inside an auto-shape.
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    pub text: &'a str,
    pub size: f64,
    pub bold: bool,
    pub color: Rgb,
}

impl<'a> Label<'a> {
    /// Bold white label, the common case on colored panels.
    pub fn bold(text: &'a str, size: f64) -> Self {
        Self {
            text,
            size,
            bold: true,
            color: palette::WHITE,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn regular(mut self) -> Self {
        self.bold = false;
        self
    }
}

/// Add a filled auto-shape with a centered, vertically middle label.
pub fn add_labeled<'s>(
    slide: &'s mut Slide,
    kind: ShapeKind,
    frame: Frame,
    fill: Rgb,
    label: Label<'_>,
) -> &'s mut Shape {
    let shape = add_filled(slide, kind, frame, fill);
    let tf = shape.text_frame();
    let p = tf.first();
    p.text(label.text)
        .size(pt(label.size))
        .color(label.color)
        .align(Alignment::Center);
    if label.bold {
        p.bold();
    }
    tf.anchor = Some(Anchor::Middle);
    shape
}

/// Add the slide title: 9in wide at the left margin, 44pt bold dark blue.
pub fn add_title<'s>(slide: &'s mut Slide, text: &str, top: f64) -> &'s mut TextFrame {
    let tf = add_text_box(slide, 0.5, top, 9.0, 1.0);
    tf.word_wrap = true;
    tf.first()
        .text(text)
        .size(pt(44.0))
        .bold()
        .color(palette::DARK_BLUE)
        .align(Alignment::Left);
    tf
}

/// Placement and styling of a body text box.
#[derive(Debug, Clone, Copy)]
pub struct BodyStyle {
    pub left: f64,
    pub width: f64,
    pub size: f64,
    pub color: Rgb,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            left: 0.5,
            width: 9.0,
            size: 18.0,
            color: palette::GRAY,
        }
    }
}

/// Add a single left-aligned paragraph of body text, 4in tall.
pub fn add_body_text<'s>(slide: &'s mut Slide, text: &str, top: f64, style: BodyStyle) -> &'s mut TextFrame {
    let tf = add_text_box(slide, style.left, top, style.width, 4.0);
    tf.word_wrap = true;
    tf.first()
        .text(text)
        .size(pt(style.size))
        .color(style.color)
        .align(Alignment::Left);
    tf
}

/// Placement and styling of a bullet list.
#[derive(Debug, Clone, Copy)]
pub struct BulletStyle {
    pub left: f64,
    pub size: f64,
    pub color: Rgb,
}

impl Default for BulletStyle {
    fn default() -> Self {
        Self {
            left: 0.5,
            size: 18.0,
            color: palette::GRAY,
        }
    }
}

/// Prefix an item with the bullet marker.
pub fn bullet(item: &str) -> String {
    format!("{}{}", BULLET, item)
}

/// Fill `tf` with one bulleted paragraph per item.
pub fn fill_bullets<F>(tf: &mut TextFrame, items: &[&str], mut style: F)
where
    F: FnMut(&mut Paragraph),
{
    tf.fill_paragraphs(items.iter().copied(), |p, item| {
        p.text(bullet(item));
        style(p);
    });
}

/// Add a bullet list in an 8.5in × 4.5in box with 6pt spacing around items.
pub fn add_bullets<'s>(slide: &'s mut Slide, items: &[&str], top: f64, style: BulletStyle) -> &'s mut TextFrame {
    let tf = add_text_box(slide, style.left, top, 8.5, 4.5);
    tf.word_wrap = true;
    fill_bullets(tf, items, |p| {
        p.size(pt(style.size))
            .color(style.color)
            .spacing(Some(pt(6.0)), Some(pt(6.0)));
    });
    tf
}

/// One titled column of bullets.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub title: &'a str,
    pub items: &'a [&'a str],
}

/// Add two titled bullet columns at x = 0.5in and x = 5.2in.
pub fn add_two_column_bullets(slide: &mut Slide, left: Column<'_>, right: Column<'_>, top: f64) {
    for (x, column) in [(0.5, left), (5.2, right)] {
        add_text_box(slide, x, top, 4.2, 0.5)
            .first()
            .text(column.title)
            .size(pt(20.0))
            .bold()
            .color(palette::BLUE);

        let tf = add_text_box(slide, x, top + 0.5, 4.2, 3.0);
        tf.word_wrap = true;
        fill_bullets(tf, column.items, |p| {
            p.size(pt(16.0)).color(palette::GRAY).spacing(Some(pt(4.0)), None);
        });
    }
}

/// Add a rounded "diagram box" whose outline matches its fill, with a
/// centered 14pt bold label.
pub fn add_diagram_box<'s>(
    slide: &'s mut Slide,
    text: &str,
    frame: Frame,
    fill: Rgb,
    text_color: Rgb,
) -> &'s mut Shape {
    let shape = add_labeled(
        slide,
        ShapeKind::RoundedRectangle,
        frame,
        fill,
        Label::bold(text, 14.0).with_color(text_color),
    );
    shape.line = Line::Solid(fill);
    shape.text_frame().word_wrap = true;
    shape
}

/// Add a 0.3in wide gray down arrow.
pub fn add_arrow_down(slide: &mut Slide, left: f64, top: f64, length: f64) -> &mut Shape {
    let shape = add_filled(
        slide,
        ShapeKind::DownArrow,
        Frame::inches(left, top, 0.3, length),
        palette::GRAY,
    );
    shape.line = Line::Solid(palette::GRAY);
    shape
}

/// Add a right arrow with a solid fill and the theme outline.
pub fn add_arrow_right(slide: &mut Slide, frame: Frame, color: Rgb) -> &mut Shape {
    add_filled(slide, ShapeKind::RightArrow, frame, color)
}

/// Add a thin vertical connector drawn as a filled inverse line.
pub fn add_connector(slide: &mut Slide, left: f64, top: f64, length: f64, color: Rgb) -> &mut Shape {
    add_filled(
        slide,
        ShapeKind::LineInverse,
        Frame::inches(left, top, 0.02, length),
        color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::inches;

    #[test]
    fn test_title_styling() {
        let mut slide = Slide::default();
        add_title(&mut slide, "SUMMARY", 0.5);

        let shape = &slide.shapes[0];
        assert_eq!(shape.kind, ShapeKind::TextBox);
        assert_eq!(shape.frame, Frame::inches(0.5, 0.5, 9.0, 1.0));

        let tf = shape.text.as_ref().unwrap();
        assert!(tf.word_wrap);
        let p = &tf.paragraphs[0];
        assert_eq!(p.text, "SUMMARY");
        assert_eq!(p.font.size, Some(pt(44.0)));
        assert!(p.font.bold);
        assert_eq!(p.font.color, Some(palette::DARK_BLUE));
        assert_eq!(p.alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_bullets_one_paragraph_per_item() {
        let mut slide = Slide::default();
        let items = ["alpha", "beta", "gamma", "delta"];
        add_bullets(&mut slide, &items, 1.5, BulletStyle { size: 22.0, ..Default::default() });

        let tf = slide.shapes[0].text.as_ref().unwrap();
        assert_eq!(tf.paragraphs.len(), 4);
        for (p, item) in tf.paragraphs.iter().zip(items) {
            assert_eq!(p.text, format!("• {}", item));
            assert_eq!(p.font.size, Some(pt(22.0)));
            assert_eq!(p.space_before, Some(pt(6.0)));
            assert_eq!(p.space_after, Some(pt(6.0)));
        }
        assert_eq!(slide.shapes[0].frame.cx, inches(8.5));
    }

    #[test]
    fn test_two_columns_add_four_boxes() {
        let mut slide = Slide::default();
        add_two_column_bullets(
            &mut slide,
            Column { title: "LEFT", items: &["a", "b", "c"] },
            Column { title: "RIGHT", items: &["d", "e"] },
            1.4,
        );

        assert_eq!(slide.shapes.len(), 4);
        assert_eq!(slide.shapes[0].frame.x, inches(0.5));
        assert_eq!(slide.shapes[1].frame.y, inches(1.9));
        assert_eq!(slide.shapes[2].frame.x, inches(5.2));

        let left = slide.shapes[1].text.as_ref().unwrap();
        let right = slide.shapes[3].text.as_ref().unwrap();
        assert_eq!(left.paragraphs.len(), 3);
        assert_eq!(right.paragraphs.len(), 2);
        assert_eq!(right.paragraphs[1].text, "• e");
        assert_eq!(right.paragraphs[1].space_after, None);
    }

    #[test]
    fn test_diagram_box_outline_matches_fill() {
        let mut slide = Slide::default();
        add_diagram_box(
            &mut slide,
            "Gateway",
            Frame::inches(1.0, 3.0, 2.5, 0.9),
            palette::ACCENT_BLUE,
            palette::WHITE,
        );

        let shape = &slide.shapes[0];
        assert_eq!(shape.kind, ShapeKind::RoundedRectangle);
        assert_eq!(shape.fill, Some(palette::ACCENT_BLUE));
        assert_eq!(shape.line, Line::Solid(palette::ACCENT_BLUE));

        let tf = shape.text.as_ref().unwrap();
        assert_eq!(tf.anchor, Some(Anchor::Middle));
        assert!(tf.paragraphs[0].font.bold);
        assert_eq!(tf.paragraphs[0].alignment, Some(Alignment::Center));
    }

    #[test]
    fn test_arrow_down_geometry() {
        let mut slide = Slide::default();
        add_arrow_down(&mut slide, 4.85, 2.45, 0.4);

        let shape = &slide.shapes[0];
        assert_eq!(shape.kind, ShapeKind::DownArrow);
        assert_eq!(shape.frame.cx, inches(0.3));
        assert_eq!(shape.frame.cy, inches(0.4));
        assert_eq!(shape.line, Line::Solid(palette::GRAY));
        assert!(shape.text.is_none());
    }

    #[test]
    fn test_body_text_defaults() {
        let mut slide = Slide::default();
        add_body_text(&mut slide, "Line one\nLine two", 2.0, BodyStyle::default());

        let shape = &slide.shapes[0];
        assert_eq!(shape.frame, Frame::inches(0.5, 2.0, 9.0, 4.0));
        let p = &shape.text.as_ref().unwrap().paragraphs[0];
        assert_eq!(p.text, "Line one\nLine two");
        assert_eq!(p.font.color, Some(palette::GRAY));
        assert!(!p.font.bold);
    }
}
