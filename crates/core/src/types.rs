//! Domain types for representing an authored presentation.

use crate::color::Rgb;
use crate::units::{inches, Emu, Points};
use serde::{Deserialize, Serialize};

/// An entire presentation: page size plus slides in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Document title written to the core properties.
    pub title: Option<String>,

    /// Page width in EMU.
    pub slide_width: Emu,

    /// Page height in EMU.
    pub slide_height: Emu,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation with the given page size.
    pub fn new(slide_width: Emu, slide_height: Emu) -> Self {
        Self {
            title: None,
            slide_width,
            slide_height,
            slides: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Create an empty 10in × 7.5in (4:3) presentation.
    pub fn standard() -> Self {
        Self::new(inches(10.0), inches(7.5))
    }

    /// Append a blank slide and return it for population.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::default());
        let index = self.slides.len() - 1;
        log::trace!("Added slide {}", index + 1);
        &mut self.slides[index]
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// All paragraph texts of all slides, flattened in z-order.
    pub fn all_lines(&self) -> Vec<&str> {
        self.slides.iter().flat_map(|s| s.lines()).collect()
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single slide: optional background fill and shapes in z-order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Solid background color; `None` inherits the master background.
    pub background: Option<Rgb>,

    /// Shapes in insertion order, which is also z-order.
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Append a shape and return it for further styling.
    pub fn push(&mut self, shape: Shape) -> &mut Shape {
        self.shapes.push(shape);
        let index = self.shapes.len() - 1;
        &mut self.shapes[index]
    }

    /// Every paragraph text on the slide, in z-order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.shapes
            .iter()
            .filter_map(|s| s.text.as_ref())
            .flat_map(|tf| tf.paragraphs.iter().map(|p| p.text.as_str()))
    }

    /// First non-empty paragraph of the first text-bearing shape.
    pub fn title(&self) -> Option<&str> {
        self.lines().find(|l| !l.trim().is_empty())
    }
}

/// Preset geometry of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A plain text box (no fill or outline unless set).
    TextBox,
    Rectangle,
    RoundedRectangle,
    Oval,
    RightArrow,
    DownArrow,
    /// A straight connector drawn from bottom-left to top-right.
    LineInverse,
}

impl ShapeKind {
    /// DrawingML `prstGeom/@prst` value.
    pub fn preset(self) -> &'static str {
        match self {
            Self::TextBox | Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Oval => "ellipse",
            Self::RightArrow => "rightArrow",
            Self::DownArrow => "downArrow",
            Self::LineInverse => "lineInv",
        }
    }

    /// Inverse of [`ShapeKind::preset`] for auto-shapes.
    pub fn from_preset(prst: &str, text_box: bool) -> Option<Self> {
        Some(match prst {
            "rect" if text_box => Self::TextBox,
            "rect" => Self::Rectangle,
            "roundRect" => Self::RoundedRectangle,
            "ellipse" => Self::Oval,
            "rightArrow" => Self::RightArrow,
            "downArrow" => Self::DownArrow,
            "lineInv" => Self::LineInverse,
            _ => return None,
        })
    }

    /// Human-readable name used for `cNvPr/@name`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::TextBox => "TextBox",
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Oval => "Oval",
            Self::RightArrow => "Right Arrow",
            Self::DownArrow => "Down Arrow",
            Self::LineInverse => "Straight Connector",
        }
    }

    pub fn is_text_box(self) -> bool {
        self == Self::TextBox
    }
}

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: Emu,
    pub y: Emu,
    pub cx: Emu,
    pub cy: Emu,
}

impl Frame {
    pub fn new(x: Emu, y: Emu, cx: Emu, cy: Emu) -> Self {
        Self { x, y, cx, cy }
    }

    /// Build a frame from inch measurements.
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(inches(left), inches(top), inches(width), inches(height))
    }
}

/// Outline treatment of a shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// Inherit: text boxes get none, auto-shapes use the theme line style.
    #[default]
    Default,
    Solid(Rgb),
    None,
}

/// A positioned visual element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub frame: Frame,

    /// Solid fill; `None` leaves text boxes transparent and auto-shapes on
    /// the theme fill.
    pub fill: Option<Rgb>,

    pub line: Line,

    /// Text content, if the shape carries any.
    pub text: Option<TextFrame>,
}

impl Shape {
    pub fn new(kind: ShapeKind, frame: Frame) -> Self {
        Self {
            kind,
            frame,
            fill: None,
            line: Line::Default,
            text: None,
        }
    }

    /// A text box with an empty first paragraph, as a fresh text frame has.
    pub fn text_box(frame: Frame) -> Self {
        let mut shape = Self::new(ShapeKind::TextBox, frame);
        shape.text = Some(TextFrame::default());
        shape
    }

    pub fn with_fill(mut self, color: Rgb) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.line = line;
        self
    }

    /// Mutable access to the text frame, creating it on first use.
    pub fn text_frame(&mut self) -> &mut TextFrame {
        self.text.get_or_insert_with(TextFrame::default)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
}

impl Alignment {
    /// DrawingML `pPr/@algn` value.
    pub fn code(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
        }
    }
}

/// Vertical anchoring of text inside its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Top,
    Middle,
}

impl Anchor {
    /// DrawingML `bodyPr/@anchor` value.
    pub fn code(self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
        }
    }
}

/// Text container of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub word_wrap: bool,

    /// `None` keeps the shape type's default anchoring.
    pub anchor: Option<Anchor>,

    /// Always holds at least one paragraph.
    pub paragraphs: Vec<Paragraph>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            word_wrap: false,
            anchor: None,
            paragraphs: vec![Paragraph::default()],
        }
    }
}

impl TextFrame {
    /// The first paragraph, which every text frame has.
    pub fn first(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::default());
        }
        &mut self.paragraphs[0]
    }

    /// Append a new empty paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        let index = self.paragraphs.len() - 1;
        &mut self.paragraphs[index]
    }

    /// Fill paragraphs from `items`: the first item reuses the initial
    /// paragraph, every further item appends one.
    pub fn fill_paragraphs<'a, I, F>(&mut self, items: I, mut style: F)
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&mut Paragraph, &'a str),
    {
        for (i, item) in items.into_iter().enumerate() {
            let p = if i == 0 { self.first() } else { self.add_paragraph() };
            style(p, item);
        }
    }
}

/// Character formatting applied to a paragraph's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub size: Option<Points>,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Rgb>,
}

/// One paragraph of text with uniform formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text; `\n` is a soft line break within the paragraph.
    pub text: String,
    pub font: Font,
    pub alignment: Option<Alignment>,
    pub space_before: Option<Points>,
    pub space_after: Option<Points>,
}

impl Paragraph {
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn size(&mut self, size: Points) -> &mut Self {
        self.font.size = Some(size);
        self
    }

    pub fn bold(&mut self) -> &mut Self {
        self.font.bold = true;
        self
    }

    pub fn italic(&mut self) -> &mut Self {
        self.font.italic = true;
        self
    }

    pub fn color(&mut self, color: Rgb) -> &mut Self {
        self.font.color = Some(color);
        self
    }

    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn spacing(&mut self, before: Option<Points>, after: Option<Points>) -> &mut Self {
        self.space_before = before;
        self.space_after = after;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use crate::units::pt;

    #[test]
    fn test_slide_order_is_insertion_order() {
        let mut pres = Presentation::standard();
        for title in ["one", "two", "three"] {
            let slide = pres.add_slide();
            let shape = slide.push(Shape::text_box(Frame::inches(0.5, 0.5, 9.0, 1.0)));
            shape.text_frame().first().text(title);
        }

        let titles: Vec<_> = pres.slides.iter().filter_map(|s| s.title()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
        assert_eq!(pres.len(), 3);
    }

    #[test]
    fn test_standard_page_size() {
        let pres = Presentation::standard();
        assert_eq!(pres.slide_width, 9_144_000);
        assert_eq!(pres.slide_height, 6_858_000);
        assert!(pres.is_empty());
    }

    #[test]
    fn test_fill_paragraphs_reuses_first() {
        let mut tf = TextFrame::default();
        tf.fill_paragraphs(["a", "b", "c"], |p, item| {
            p.text(item).size(pt(12.0));
        });
        assert_eq!(tf.paragraphs.len(), 3);
        assert_eq!(tf.paragraphs[0].text, "a");
        assert_eq!(tf.paragraphs[2].font.size, Some(pt(12.0)));
    }

    #[test]
    fn test_fill_paragraphs_empty_keeps_one() {
        let mut tf = TextFrame::default();
        tf.fill_paragraphs(std::iter::empty(), |p, item| {
            p.text(item);
        });
        assert_eq!(tf.paragraphs.len(), 1);
        assert!(tf.paragraphs[0].text.is_empty());
    }

    #[test]
    fn test_paragraph_builder() {
        let mut p = Paragraph::default();
        p.text("Hi").size(pt(20.0)).bold().color(palette::BLUE).align(Alignment::Center);
        assert!(p.font.bold);
        assert!(!p.font.italic);
        assert_eq!(p.font.color, Some(palette::BLUE));
        assert_eq!(p.alignment, Some(Alignment::Center));
    }

    #[test]
    fn test_preset_round_trip() {
        for kind in [
            ShapeKind::TextBox,
            ShapeKind::Rectangle,
            ShapeKind::RoundedRectangle,
            ShapeKind::Oval,
            ShapeKind::RightArrow,
            ShapeKind::DownArrow,
            ShapeKind::LineInverse,
        ] {
            assert_eq!(ShapeKind::from_preset(kind.preset(), kind.is_text_box()), Some(kind));
        }
        assert_eq!(ShapeKind::from_preset("star5", false), None);
    }

    #[test]
    fn test_lines_skip_shapes_without_text() {
        let mut slide = Slide::default();
        slide.push(Shape::new(ShapeKind::Rectangle, Frame::default()).with_fill(palette::BLUE));
        slide
            .push(Shape::text_box(Frame::default()))
            .text_frame()
            .first()
            .text("only");
        assert_eq!(slide.lines().collect::<Vec<_>>(), vec!["only"]);
    }
}
