//! Slides 21–25: demo, outcomes and wrap-up.

use super::{content_slide, new_slide, PRESENTER};
use deck_core::compose::{
    add_arrow_right, add_bullets, add_filled, add_labeled, add_text_box, add_title, BulletStyle, Label,
};
use deck_core::palette::{ACCENT_BLUE, BLUE, DARK_BLUE, GRAY, LIGHT_GRAY, WHITE};
use deck_core::{pt, Alignment, Frame, Line, Paragraph, Presentation, Rgb, ShapeKind, Slide};

/// A dark rounded panel holding one line of white command text.
fn add_command(slide: &mut Slide, heading: &str, command: &str, top: f64) {
    add_text_box(slide, 0.5, top, 9.0, 0.4)
        .first()
        .text(heading)
        .size(pt(20.0))
        .bold()
        .color(BLUE);

    add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(0.5, top + 0.5, 9.0, 0.8), DARK_BLUE);
    add_text_box(slide, 0.7, top + 0.6, 8.6, 0.6)
        .first()
        .text(command)
        .size(pt(16.0))
        .color(WHITE);
}

/// Centered paragraph with the given size and color.
fn centered(p: &mut Paragraph, text: &str, size: f64, color: Rgb) {
    p.text(text).size(pt(size)).color(color).align(Alignment::Center);
}

pub(super) fn demo(pres: &mut Presentation) {
    let slide = new_slide(pres, DARK_BLUE);

    add_text_box(slide, 0.5, 2.5, 9.0, 1.0)
        .first()
        .text("LIVE DEMONSTRATION")
        .size(pt(48.0))
        .bold()
        .color(WHITE)
        .align(Alignment::Center);

    let items = [
        "1. MCP Context Forge Admin UI",
        "2. Tool Discovery via API",
        "3. Tool Governance in Action",
        "4. Federation (if time permits)",
    ];
    for (i, item) in items.iter().enumerate() {
        let tf = add_text_box(slide, 2.0, 4.0 + i as f64 * 0.6, 6.0, 0.5);
        centered(tf.first(), item, 22.0, WHITE);
    }
}

pub(super) fn key_outcomes(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "KEY OUTCOMES WITH MCP CONTEXT FORGE", 0.5);

    for (left, heading, color) in [(0.5, "BEFORE", GRAY), (5.5, "AFTER", BLUE)] {
        let tf = add_text_box(slide, left, 1.4, 4.0, 0.5);
        centered(tf.first(), heading, 20.0, color);
        tf.first().bold();
    }

    let outcomes = [
        ("Custom integrations per tool", "Standardized protocol for all tools"),
        ("Scattered security configurations", "Centralized auth and RBAC"),
        ("No visibility into tool usage", "Complete observability and audit trail"),
        ("Vendor-locked integrations", "Portable across AI providers"),
    ];
    for (i, (before, after)) in outcomes.iter().enumerate() {
        let y = 2.0 + i as f64 * 1.1;

        add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(0.5, y, 4.0, 0.9), LIGHT_GRAY);
        let tf = add_text_box(slide, 0.6, y + 0.2, 3.8, 0.6);
        tf.word_wrap = true;
        tf.first().text(*before).size(pt(14.0)).color(GRAY);

        add_arrow_right(slide, Frame::inches(4.6, y + 0.3, 0.8, 0.3), ACCENT_BLUE);

        add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(5.5, y, 4.0, 0.9), ACCENT_BLUE);
        let tf = add_text_box(slide, 5.6, y + 0.2, 3.8, 0.6);
        tf.word_wrap = true;
        tf.first().text(*after).size(pt(14.0)).color(WHITE);
    }
}

pub(super) fn getting_started(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "GETTING STARTED", 0.5);

    add_command(
        slide,
        "QUICK START (PyPI)",
        "pip install mcp-contextforge-gateway && mcpgateway serve",
        1.5,
    );
    add_command(
        slide,
        "QUICK START (Docker)",
        "docker run -p 4444:4444 ghcr.io/ibm/mcp-context-forge:latest",
        3.0,
    );

    add_text_box(slide, 0.5, 4.6, 9.0, 0.4)
        .first()
        .text("RESOURCES")
        .size(pt(20.0))
        .bold()
        .color(BLUE);

    let resources = [
        "GitHub: github.com/IBM/mcp-context-forge",
        "Documentation: ibm.github.io/mcp-context-forge",
        "PyPI: pypi.org/project/mcp-contextforge-gateway",
    ];
    add_bullets(slide, &resources, 5.0, BulletStyle::default());
}

pub(super) fn summary(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "SUMMARY", 0.5);

    let points = [
        (
            "1",
            "MCP provides the STANDARD",
            "Consistent interface for AI-tool interaction",
        ),
        (
            "2",
            "MCP Context Forge provides the CONTROL",
            "Centralized governance, security, federation",
        ),
        (
            "3",
            "Together they enable SCALE",
            "Production-ready agentic AI infrastructure",
        ),
    ];
    for (i, (number, heading, description)) in points.iter().enumerate() {
        let y = 1.6 + i as f64 * 1.4;

        add_labeled(
            slide,
            ShapeKind::Oval,
            Frame::inches(0.5, y, 0.6, 0.6),
            BLUE,
            Label::bold(number, 24.0),
        );
        add_text_box(slide, 1.3, y, 8.0, 0.5)
            .first()
            .text(*heading)
            .size(pt(22.0))
            .bold()
            .color(DARK_BLUE);
        add_text_box(slide, 1.3, y + 0.5, 8.0, 0.5)
            .first()
            .text(*description)
            .size(pt(18.0))
            .color(GRAY);
    }

    add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(0.5, 5.5, 9.0, 1.0), LIGHT_GRAY).line =
        Line::Solid(BLUE);
    let tf = add_text_box(slide, 0.7, 5.65, 8.6, 0.7);
    tf.word_wrap = true;
    tf.first()
        .text("\"Tools become governed, reusable platform assets — not one-off integrations.\"")
        .size(pt(18.0))
        .italic()
        .color(DARK_BLUE)
        .align(Alignment::Center);
}

pub(super) fn thank_you(pres: &mut Presentation) {
    let slide = new_slide(pres, DARK_BLUE);

    add_text_box(slide, 0.5, 1.5, 9.0, 1.0)
        .first()
        .text("THANK YOU")
        .size(pt(56.0))
        .bold()
        .color(WHITE)
        .align(Alignment::Center);

    let tf = add_text_box(slide, 0.5, 2.5, 9.0, 0.6);
    centered(tf.first(), "Questions & Discussion", 28.0, ACCENT_BLUE);

    let tf = add_text_box(slide, 0.5, 4.0, 9.0, 1.5);
    tf.fill_paragraphs(PRESENTER, |p, line| centered(p, line, 18.0, LIGHT_GRAY));
    tf.paragraphs[0].size(pt(22.0)).bold().color(WHITE);

    let contact = [
        "CONNECT",
        "GitHub: github.com/IBM/mcp-context-forge",
        "Documentation: ibm.github.io/mcp-context-forge",
    ];
    let tf = add_text_box(slide, 0.5, 5.8, 9.0, 1.0);
    tf.fill_paragraphs(contact, |p, line| centered(p, line, 16.0, WHITE));
    tf.paragraphs[0].size(pt(18.0)).bold().color(ACCENT_BLUE);
}
