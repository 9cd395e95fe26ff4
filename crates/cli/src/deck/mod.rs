//! The MCP Context Forge presentation, slide by slide.
//!
//! Content is fixed: every position is a literal and repeated rows or grids
//! are driven from small tables of text.

mod closing;
mod forge;
mod intro;

use deck_core::compose::{add_text_box, set_background};
use deck_core::{palette, pt, Alignment, Presentation, Rgb, Slide};

/// Document title written to the package properties.
pub const DECK_TITLE: &str = "MCP Context Forge";

/// Number of slides the deck always has.
pub const SLIDE_COUNT: usize = 25;

/// Presenter name, role and affiliation.
const PRESENTER: [&str; 3] = [
    "Ruslan Idelfonso Magana Vsevolodovna",
    "Data Scientist & AI Engineer",
    "IBM Client Innovation Center Italy",
];

/// Build the complete deck.
pub fn build_deck() -> Presentation {
    let mut pres = Presentation::standard().with_title(DECK_TITLE);

    intro::title(&mut pres);
    intro::objectives(&mut pres);
    intro::evolution(&mut pres);
    intro::enterprise_challenge(&mut pres);
    intro::pain_points(&mut pres);
    intro::agentic_complexity(&mut pres);
    intro::introducing_mcp(&mut pres);
    intro::core_concepts(&mut pres);
    intro::why_mcp_matters(&mut pres);
    intro::missing_piece(&mut pres);

    forge::introducing_forge(&mut pres);
    forge::architecture(&mut pres);
    forge::capabilities(&mut pres);
    forge::tool_lifecycle(&mut pres);
    forge::security(&mut pres);
    forge::federation(&mut pres);
    forge::plugins(&mut pres);
    forge::observability(&mut pres);
    forge::deployment(&mut pres);
    forge::admin_ui(&mut pres);

    closing::demo(&mut pres);
    closing::key_outcomes(&mut pres);
    closing::getting_started(&mut pres);
    closing::summary(&mut pres);
    closing::thank_you(&mut pres);

    debug_assert_eq!(pres.len(), SLIDE_COUNT);
    log::debug!("Built deck with {} slides", pres.len());
    pres
}

/// Append a slide with a solid background.
fn new_slide(pres: &mut Presentation, background: Rgb) -> &mut Slide {
    let slide = pres.add_slide();
    set_background(slide, background);
    slide
}

/// Append a white content slide.
fn content_slide(pres: &mut Presentation) -> &mut Slide {
    new_slide(pres, palette::WHITE)
}

/// Centered bold one-liner across the content width.
fn add_statement(slide: &mut Slide, text: &str, top: f64, size: f64, color: Rgb) {
    add_text_box(slide, 0.5, top, 9.0, 0.6)
        .first()
        .text(text)
        .size(pt(size))
        .bold()
        .color(color)
        .align(Alignment::Center);
}

/// Column and row of item `i` in a row-major grid with `columns` columns.
fn grid_cell(i: usize, columns: usize) -> (f64, f64) {
    ((i % columns) as f64, (i / columns) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::compose::BULLET;
    use deck_core::{DeckOutline, ShapeKind};

    const TITLES: [&str; SLIDE_COUNT] = [
        "ENTERPRISE AI TOOL GOVERNANCE",
        "WHAT YOU WILL LEARN TODAY",
        "THE EVOLUTION OF AI SYSTEMS",
        "THE ENTERPRISE CHALLENGE",
        "PAIN POINTS AT ENTERPRISE SCALE",
        "AGENTIC AI AMPLIFIES COMPLEXITY",
        "INTRODUCING MODEL CONTEXT PROTOCOL (MCP)",
        "MCP CORE CONCEPTS",
        "WHY MCP MATTERS FOR ENTERPRISE",
        "THE MISSING PIECE: CENTRAL GOVERNANCE",
        "INTRODUCING MCP CONTEXT FORGE",
        "HIGH-LEVEL ARCHITECTURE",
        "ENTERPRISE CAPABILITIES",
        "TOOL LIFECYCLE MANAGEMENT",
        "SECURITY ARCHITECTURE",
        "FEDERATION & MULTI-CLUSTER DEPLOYMENT",
        "EXTENSIBLE PLUGIN SYSTEM",
        "OBSERVABILITY STACK",
        "FLEXIBLE DEPLOYMENT OPTIONS",
        "ADMIN UI: REAL-TIME MANAGEMENT",
        "LIVE DEMONSTRATION",
        "KEY OUTCOMES WITH MCP CONTEXT FORGE",
        "GETTING STARTED",
        "SUMMARY",
        "THANK YOU",
    ];

    /// Paragraphs of every shape whose paragraphs all start with the bullet marker.
    fn bullet_frames(slide: &Slide) -> Vec<Vec<&str>> {
        slide
            .shapes
            .iter()
            .filter_map(|s| s.text.as_ref())
            .map(|tf| tf.paragraphs.iter().map(|p| p.text.as_str()).collect::<Vec<_>>())
            .filter(|ps| ps.iter().all(|p| p.starts_with(BULLET)))
            .collect()
    }

    #[test]
    fn test_deck_has_25_slides_in_order() {
        let deck = build_deck();
        assert_eq!(deck.len(), SLIDE_COUNT);

        let titles: Vec<_> = deck.slides.iter().map(|s| s.title().unwrap_or_default()).collect();
        assert_eq!(titles, TITLES);
        assert_eq!(deck.title.as_deref(), Some(DECK_TITLE));
    }

    #[test]
    fn test_bullet_frames_match_item_counts() {
        let deck = build_deck();
        let counts = |n: usize| -> Vec<usize> {
            bullet_frames(&deck.slides[n - 1]).iter().map(Vec::len).collect()
        };

        assert_eq!(counts(2), vec![5]);
        assert_eq!(counts(6), vec![4, 4]);
        assert_eq!(counts(11), vec![6]);
        assert_eq!(counts(13), vec![3, 3, 3, 3]);
        assert_eq!(counts(15), vec![4, 3]);
        assert_eq!(counts(17), vec![4, 4]);
        assert_eq!(counts(18), vec![4, 2, 2, 3]);
        assert_eq!(counts(19), vec![2, 2, 2, 2]);
        assert_eq!(counts(23), vec![3]);
    }

    #[test]
    fn test_every_bullet_is_prefixed() {
        let deck = build_deck();
        let slide = &deck.slides[1];
        let frames = bullet_frames(slide);
        assert_eq!(
            frames[0][0],
            "• Why AI systems require standardized tool interfaces"
        );
        assert!(frames[0].iter().all(|p| p.starts_with("• ")));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build_deck();
        let b = build_deck();
        assert_eq!(a, b);
        assert_eq!(a.all_lines(), b.all_lines());
    }

    #[test]
    fn test_dark_slides() {
        let deck = build_deck();
        for (idx, slide) in deck.slides.iter().enumerate() {
            let expected = if idx == 20 || idx == 24 {
                palette::DARK_BLUE
            } else {
                palette::WHITE
            };
            assert_eq!(slide.background, Some(expected), "slide {}", idx + 1);
        }
    }

    #[test]
    fn test_shapes_fit_on_page() {
        let deck = build_deck();
        for (idx, slide) in deck.slides.iter().enumerate() {
            for shape in &slide.shapes {
                let f = shape.frame;
                assert!(f.cx >= 0 && f.cy >= 0, "slide {}", idx + 1);
                // Auto-fit text boxes may run past the right and bottom edges; their origin may not.
                assert!(f.x >= 0 && f.x < deck.slide_width, "slide {}: {:?}", idx + 1, f);
                assert!(f.y >= 0 && f.y < deck.slide_height, "slide {}: {:?}", idx + 1, f);
                if !shape.kind.is_text_box() {
                    assert!(f.x + f.cx <= deck.slide_width, "slide {}: {:?}", idx + 1, f);
                }
            }
        }
    }

    #[test]
    fn test_evolution_descriptions_overhang_right_edge() {
        let deck = build_deck();
        let slide = &deck.slides[2];
        let overhanging: Vec<_> = slide
            .shapes
            .iter()
            .filter(|s| s.frame.x + s.frame.cx > deck.slide_width)
            .collect();

        assert_eq!(overhanging.len(), 3);
        assert!(overhanging.iter().all(|s| s.kind == ShapeKind::TextBox));
        assert_eq!(overhanging[0].frame, deck_core::Frame::inches(2.7, 2.0, 9.0, 4.0));
    }

    #[test]
    fn test_architecture_diagram_shapes() {
        let deck = build_deck();
        let outline = DeckOutline::from_presentation(&deck);
        let slide = &outline.slides[11];

        let kinds: Vec<_> = slide.shapes.iter().filter_map(|s| s.kind).collect();
        assert_eq!(kinds.iter().filter(|k| **k == ShapeKind::DownArrow).count(), 2);
        assert_eq!(kinds.iter().filter(|k| **k == ShapeKind::RoundedRectangle).count(), 10);
    }

    #[test]
    fn test_grid_cell() {
        assert_eq!(grid_cell(0, 3), (0.0, 0.0));
        assert_eq!(grid_cell(4, 3), (1.0, 1.0));
        assert_eq!(grid_cell(5, 2), (1.0, 2.0));
    }
}
