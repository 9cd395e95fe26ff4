//! Structural outline of a deck: what a reader sees when it opens the file.
//!
//! The outline keeps geometry kind, position and paragraph text of each
//! shape but drops styling, so an authored [`Presentation`] and a deck read
//! back from disk can be compared.

use crate::color::Rgb;
use crate::types::{Presentation, ShapeKind, Slide};
use crate::units::Emu;
use serde::{Deserialize, Serialize};

/// Outline of an entire deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckOutline {
    pub slide_width: Emu,
    pub slide_height: Emu,

    /// Slides in presentation order.
    pub slides: Vec<SlideOutline>,
}

impl DeckOutline {
    /// Outline of an in-memory presentation.
    pub fn from_presentation(pres: &Presentation) -> Self {
        Self {
            slide_width: pres.slide_width,
            slide_height: pres.slide_height,
            slides: pres
                .slides
                .iter()
                .enumerate()
                .map(|(i, s)| SlideOutline::from_slide(i + 1, s))
                .collect(),
        }
    }

    /// Get all text lines from all slides, flattened.
    pub fn all_lines(&self) -> Vec<&str> {
        self.slides
            .iter()
            .flat_map(|s| s.shapes.iter())
            .flat_map(|sh| sh.paragraphs.iter().map(String::as_str))
            .collect()
    }

    /// Describe the first difference from `other`, if any.
    pub fn first_difference(&self, other: &DeckOutline) -> Option<String> {
        if (self.slide_width, self.slide_height) != (other.slide_width, other.slide_height) {
            return Some(format!(
                "page size {}x{} vs {}x{}",
                self.slide_width, self.slide_height, other.slide_width, other.slide_height
            ));
        }
        if self.slides.len() != other.slides.len() {
            return Some(format!(
                "slide count {} vs {}",
                self.slides.len(),
                other.slides.len()
            ));
        }
        for (a, b) in self.slides.iter().zip(&other.slides) {
            if a.background != b.background {
                return Some(format!("slide {}: background differs", a.number));
            }
            if a.shapes.len() != b.shapes.len() {
                return Some(format!(
                    "slide {}: shape count {} vs {}",
                    a.number,
                    a.shapes.len(),
                    b.shapes.len()
                ));
            }
            for (idx, (sa, sb)) in a.shapes.iter().zip(&b.shapes).enumerate() {
                if sa != sb {
                    return Some(format!("slide {}, shape {}: {:?} vs {:?}", a.number, idx + 1, sa, sb));
                }
            }
        }
        None
    }
}

/// Outline of a single slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideOutline {
    /// 1-based slide number.
    pub number: usize,

    pub background: Option<Rgb>,

    /// Shapes in z-order.
    pub shapes: Vec<ShapeOutline>,
}

impl SlideOutline {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            background: None,
            shapes: Vec::new(),
        }
    }

    fn from_slide(number: usize, slide: &Slide) -> Self {
        Self {
            number,
            background: slide.background,
            shapes: slide
                .shapes
                .iter()
                .map(|shape| ShapeOutline {
                    kind: Some(shape.kind),
                    x: shape.frame.x,
                    y: shape.frame.y,
                    paragraphs: shape
                        .text
                        .as_ref()
                        .map(|tf| tf.paragraphs.iter().map(|p| p.text.clone()).collect())
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }

    /// Get non-empty text lines.
    pub fn non_empty_lines(&self) -> Vec<&str> {
        self.shapes
            .iter()
            .flat_map(|s| s.paragraphs.iter().map(String::as_str))
            .filter(|s| !s.trim().is_empty())
            .collect()
    }

    /// The first non-empty line, which on every content slide is the title.
    pub fn title(&self) -> Option<&str> {
        self.non_empty_lines().into_iter().next()
    }
}

/// A shape as seen by a reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeOutline {
    /// `None` for geometry this crate never writes.
    pub kind: Option<ShapeKind>,

    pub x: Emu,
    pub y: Emu,

    /// Paragraph texts; empty for shapes without a text body.
    pub paragraphs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use crate::compose::{add_bullets, add_title, BulletStyle};

    fn sample() -> Presentation {
        let mut pres = Presentation::standard();
        let slide = pres.add_slide();
        slide.background = Some(palette::WHITE);
        add_title(slide, "AGENDA", 0.5);
        add_bullets(slide, &["one", "two"], 1.5, BulletStyle::default());
        pres
    }

    #[test]
    fn test_outline_from_presentation() {
        let outline = DeckOutline::from_presentation(&sample());

        assert_eq!(outline.slides.len(), 1);
        let slide = &outline.slides[0];
        assert_eq!(slide.number, 1);
        assert_eq!(slide.title(), Some("AGENDA"));
        assert_eq!(slide.shapes[1].paragraphs, vec!["• one", "• two"]);
        assert_eq!(outline.all_lines(), vec!["AGENDA", "• one", "• two"]);
    }

    #[test]
    fn test_first_difference() {
        let a = DeckOutline::from_presentation(&sample());
        assert_eq!(a.first_difference(&a.clone()), None);

        let mut b = a.clone();
        b.slides[0].shapes[1].paragraphs.pop();
        let diff = a.first_difference(&b).unwrap();
        assert!(diff.starts_with("slide 1, shape 2"));

        let mut c = a.clone();
        c.slides.clear();
        assert_eq!(a.first_difference(&c).unwrap(), "slide count 1 vs 0");
    }
}
