//! Slides 1–10: the problem space and the Model Context Protocol.

use super::{add_statement, content_slide, grid_cell, new_slide, PRESENTER};
use deck_core::compose::{
    add_arrow_right, add_body_text, add_bullets, add_diagram_box, add_filled, add_labeled, add_text_box,
    add_title, add_two_column_bullets, BodyStyle, BulletStyle, Column, Label,
};
use deck_core::palette::{ACCENT_BLUE, BLUE, DARK_BLUE, GRAY, LIGHT_GRAY, WHITE};
use deck_core::{pt, Alignment, Frame, Line, Presentation, Shape, ShapeKind};

pub(super) fn title(pres: &mut Presentation) {
    let slide = new_slide(pres, WHITE);

    slide.push(
        Shape::new(ShapeKind::Rectangle, Frame::inches(0.0, 0.0, 10.0, 0.3))
            .with_fill(BLUE)
            .with_line(Line::None),
    );

    add_text_box(slide, 0.5, 2.0, 9.0, 1.2)
        .first()
        .text("ENTERPRISE AI TOOL GOVERNANCE")
        .size(pt(40.0))
        .bold()
        .color(DARK_BLUE)
        .align(Alignment::Center);

    add_text_box(slide, 0.5, 3.2, 9.0, 0.8)
        .first()
        .text("Model Context Protocol (MCP) & MCP Context Forge")
        .size(pt(28.0))
        .color(BLUE)
        .align(Alignment::Center);

    add_text_box(slide, 0.5, 4.2, 9.0, 0.6)
        .first()
        .text("A Production-Grade Approach to Scalable, Governed, Agentic AI Infrastructure")
        .size(pt(18.0))
        .color(GRAY)
        .align(Alignment::Center);

    let tf = add_text_box(slide, 0.5, 5.5, 9.0, 1.2);
    tf.fill_paragraphs(PRESENTER, |p, line| {
        p.text(line).color(GRAY).align(Alignment::Center).size(pt(16.0));
    });
    tf.paragraphs[0].size(pt(20.0)).bold().color(DARK_BLUE);
}

pub(super) fn objectives(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "WHAT YOU WILL LEARN TODAY", 0.5);

    let objectives = [
        "Why AI systems require standardized tool interfaces",
        "How Model Context Protocol (MCP) addresses this need",
        "What MCP Context Forge provides as a governance layer",
        "Enterprise capabilities: federation, multi-tenancy, security, and observability",
        "Live demonstration of tool discovery and governance",
    ];
    add_bullets(slide, &objectives, 1.5, BulletStyle { size: 22.0, ..Default::default() });
}

pub(super) fn evolution(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "THE EVOLUTION OF AI SYSTEMS", 0.5);

    let eras = [
        ("2020-2022", 1.8, GRAY, "Question Answering\nModel → Text Response", 2.0),
        ("2023-2024", 3.2, BLUE, "Tool-Augmented AI\nModel → Tools → Actions", 3.6),
        ("2025+", 4.6, ACCENT_BLUE, "Agentic AI Ecosystems\nAgents ↔ Services ↔ Agents", 5.0),
    ];
    for (years, top, fill, description, text_top) in eras {
        add_diagram_box(slide, years, Frame::inches(0.5, top, 2.0, 0.6), fill, WHITE);
        add_body_text(
            slide,
            description,
            text_top,
            BodyStyle { left: 2.7, size: 16.0, ..Default::default() },
        );
    }
}

pub(super) fn enterprise_challenge(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "THE ENTERPRISE CHALLENGE", 0.5);
    add_body_text(
        slide,
        "Modern AI systems depend on diverse tool ecosystems:",
        1.4,
        BodyStyle { size: 20.0, ..Default::default() },
    );

    let tools = [
        "REST APIs",
        "Databases",
        "Legacy Systems",
        "gRPC Services",
        "Internal Platforms",
        "Cloud Services",
    ];
    for (i, tool) in tools.iter().enumerate() {
        let (col, row) = grid_cell(i, 3);
        add_diagram_box(
            slide,
            tool,
            Frame::inches(0.8 + col * 3.0, 2.2 + row * 1.2, 2.5, 0.8),
            LIGHT_GRAY,
            DARK_BLUE,
        );
    }

    add_body_text(
        slide,
        "Each requires custom integration, authentication, and error handling",
        5.0,
        BodyStyle::default(),
    );
}

pub(super) fn pain_points(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "PAIN POINTS AT ENTERPRISE SCALE", 0.5);

    let pain_points = [
        ("1. TOOL SPRAWL", "No central inventory • Duplicate integrations across teams"),
        (
            "2. INCONSISTENT SECURITY",
            "Each integration handles auth differently • No unified audit trail",
        ),
        (
            "3. OPERATIONAL COMPLEXITY",
            "No visibility into usage patterns • Cannot disable tools centrally",
        ),
        ("4. VENDOR LOCK-IN", "Tight coupling to AI providers • Expensive to switch"),
    ];

    let mut y = 1.5;
    for (heading, description) in pain_points {
        add_text_box(slide, 0.5, y, 9.0, 0.4)
            .first()
            .text(heading)
            .size(pt(20.0))
            .bold()
            .color(BLUE);
        add_text_box(slide, 0.7, y + 0.4, 8.5, 0.5)
            .first()
            .text(description)
            .size(pt(16.0))
            .color(GRAY);
        y += 1.3;
    }
}

pub(super) fn agentic_complexity(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "AGENTIC AI AMPLIFIES COMPLEXITY", 0.5);

    add_two_column_bullets(
        slide,
        Column {
            title: "Traditional AI",
            items: &[
                "Human in the loop",
                "Fixed tool selection",
                "Supervised execution",
                "Single model focus",
            ],
        },
        Column {
            title: "Agentic AI",
            items: &[
                "Autonomous operation",
                "Dynamic tool discovery",
                "Multi-agent coordination",
                "Cross-system workflows",
            ],
        },
        1.5,
    );

    add_statement(slide, "Agents need DYNAMIC, GOVERNED tool discovery", 5.5, 22.0, BLUE);
}

pub(super) fn introducing_mcp(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "INTRODUCING MODEL CONTEXT PROTOCOL (MCP)", 0.5);
    add_body_text(
        slide,
        "An open standard that defines how AI systems interact with tools, resources, and prompts",
        1.4,
        BodyStyle { size: 20.0, ..Default::default() },
    );

    add_diagram_box(
        slide,
        "AI Client\n(Claude, GPT, watsonx)",
        Frame::inches(1.0, 2.5, 3.0, 1.0),
        DARK_BLUE,
        WHITE,
    );
    add_diagram_box(
        slide,
        "MCP Protocol\nJSON-RPC 2.0",
        Frame::inches(4.5, 2.5, 2.5, 1.0),
        ACCENT_BLUE,
        WHITE,
    );
    add_diagram_box(
        slide,
        "MCP Server\n(Tools, Resources, Prompts)",
        Frame::inches(7.5, 2.5, 2.0, 1.0),
        BLUE,
        WHITE,
    );

    for left in [4.0, 7.0] {
        add_arrow_right(slide, Frame::inches(left, 2.85, 0.5, 0.3), GRAY);
    }

    add_body_text(
        slide,
        "Key: Standardized interface, any implementation",
        4.5,
        BodyStyle { color: BLUE, ..Default::default() },
    );
}

pub(super) fn core_concepts(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "MCP CORE CONCEPTS", 0.5);

    let concepts = [
        (
            "TOOLS",
            "Executable functions with defined schemas",
            "search_database, send_email, run_query",
        ),
        (
            "RESOURCES",
            "URI-addressable data sources",
            "file://config.json, db://users/123",
        ),
        (
            "PROMPTS",
            "Reusable templates with placeholders",
            "code_review_prompt, summary_template",
        ),
    ];

    let mut y = 1.5;
    for (name, description, examples) in concepts {
        add_labeled(
            slide,
            ShapeKind::RoundedRectangle,
            Frame::inches(0.5, y, 2.0, 0.6),
            BLUE,
            Label::bold(name, 18.0),
        );
        add_text_box(slide, 2.7, y, 6.5, 0.4)
            .first()
            .text(description)
            .size(pt(18.0))
            .color(DARK_BLUE);
        add_text_box(slide, 2.7, y + 0.4, 6.5, 0.4)
            .first()
            .text(format!("Examples: {}", examples))
            .size(pt(14.0))
            .color(GRAY);
        y += 1.5;
    }
}

pub(super) fn why_mcp_matters(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "WHY MCP MATTERS FOR ENTERPRISE", 0.5);

    let benefits = [
        ("DECOUPLING", "Models and tools evolve independently"),
        ("REUSABILITY", "Build once, use across all AI systems"),
        ("VENDOR FLEXIBILITY", "Switch AI providers without rewriting integrations"),
        ("FUTURE-PROOF", "Ready for agentic workflows and multi-agent systems"),
    ];

    for (i, (name, description)) in benefits.into_iter().enumerate() {
        let (col, row) = grid_cell(i, 2);
        let x = 0.5 + col * 4.7;
        let y = 1.8 + row * 2.2;

        add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(x, y, 4.3, 1.8), LIGHT_GRAY).line =
            Line::Solid(BLUE);

        add_text_box(slide, x + 0.2, y + 0.2, 3.9, 0.5)
            .first()
            .text(name)
            .size(pt(20.0))
            .bold()
            .color(BLUE);

        let tf = add_text_box(slide, x + 0.2, y + 0.7, 3.9, 0.9);
        tf.word_wrap = true;
        tf.first().text(description).size(pt(16.0)).color(GRAY);
    }
}

pub(super) fn missing_piece(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "THE MISSING PIECE: CENTRAL GOVERNANCE", 0.5);
    add_body_text(
        slide,
        "MCP standardizes the interface, but enterprises need answers to:",
        1.4,
        BodyStyle { size: 20.0, ..Default::default() },
    );

    let questions = [
        "How do we manage dozens of MCP servers?",
        "How do we enforce consistent security?",
        "How do we enable/disable tools centrally?",
        "How do we provide team-based access control?",
        "How do we monitor and audit tool usage?",
    ];
    for (i, question) in questions.iter().enumerate() {
        add_text_box(slide, 1.0, 2.2 + i as f64 * 0.7, 8.0, 0.6)
            .first()
            .text(format!("?  {}", question))
            .size(pt(20.0))
            .color(DARK_BLUE);
    }

    add_statement(slide, "This is where MCP Context Forge comes in", 6.0, 22.0, BLUE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Anchor;

    #[test]
    fn test_title_slide_presenter_block() {
        let mut pres = Presentation::standard();
        title(&mut pres);

        let slide = &pres.slides[0];
        assert_eq!(slide.shapes[0].line, Line::None);

        let presenter = slide.shapes.last().unwrap().text.as_ref().unwrap();
        let lines: Vec<_> = presenter.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(lines, PRESENTER);
        assert!(presenter.paragraphs[0].font.bold);
        assert_eq!(presenter.paragraphs[0].font.size, Some(pt(20.0)));
        assert!(!presenter.paragraphs[1].font.bold);
        assert_eq!(presenter.paragraphs[2].font.size, Some(pt(16.0)));
    }

    #[test]
    fn test_core_concepts_rows() {
        let mut pres = Presentation::standard();
        core_concepts(&mut pres);

        let slide = &pres.slides[0];
        // Title plus three rows of box, description and examples.
        assert_eq!(slide.shapes.len(), 10);
        let label = slide.shapes[1].text.as_ref().unwrap();
        assert_eq!(label.paragraphs[0].text, "TOOLS");
        assert_eq!(label.anchor, Some(Anchor::Middle));
        assert_eq!(slide.shapes[1].line, Line::Default);
        assert_eq!(
            slide.shapes[3].text.as_ref().unwrap().paragraphs[0].text,
            "Examples: search_database, send_email, run_query"
        );
    }

    #[test]
    fn test_missing_piece_questions() {
        let mut pres = Presentation::standard();
        missing_piece(&mut pres);

        let questions: Vec<_> = pres.slides[0]
            .lines()
            .filter(|l| l.starts_with("?  "))
            .collect();
        assert_eq!(questions.len(), 5);
    }
}
