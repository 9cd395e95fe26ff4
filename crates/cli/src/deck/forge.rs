//! Slides 11–20: what MCP Context Forge is and what it offers.

use super::{add_statement, content_slide, grid_cell};
use deck_core::compose::{
    add_arrow_down, add_arrow_right, add_body_text, add_bullets, add_connector, add_diagram_box, add_filled,
    add_labeled, add_text_box, add_title, add_two_column_bullets, fill_bullets, BodyStyle, BulletStyle, Column,
    Label,
};
use deck_core::palette::{ACCENT_BLUE, BLUE, DARK_BLUE, GRAY, LIGHT_GRAY, WHITE};
use deck_core::{pt, Alignment, Frame, Line, Presentation, ShapeKind, Slide};

/// A blue heading bar over a box of 14pt bullets.
fn add_panel(slide: &mut Slide, x: f64, y: f64, title: &str, items: &[&str], items_height: f64) {
    add_labeled(
        slide,
        ShapeKind::RoundedRectangle,
        Frame::inches(x, y, 4.5, 0.5),
        BLUE,
        Label::bold(title, 18.0),
    );

    let tf = add_text_box(slide, x + 0.1, y + 0.6, 4.3, items_height);
    tf.word_wrap = true;
    fill_bullets(tf, items, |p| {
        p.size(pt(14.0)).color(GRAY);
    });
}

/// Bold blue section heading spanning the content width.
fn add_section_heading(slide: &mut Slide, text: &str, top: f64) {
    add_text_box(slide, 0.5, top, 9.0, 0.5)
        .first()
        .text(text)
        .size(pt(18.0))
        .bold()
        .color(BLUE);
}

pub(super) fn introducing_forge(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "INTRODUCING MCP CONTEXT FORGE", 0.5);
    add_body_text(
        slide,
        "A production-grade gateway, proxy, and registry for MCP servers and A2A agents",
        1.3,
        BodyStyle {
            size: 20.0,
            color: DARK_BLUE,
            ..Default::default()
        },
    );

    let features = [
        "Gateway & Proxy Layer",
        "Federation across multiple services",
        "Virtual server composition",
        "Multi-transport support (SSE, WebSocket, HTTP)",
        "Admin UI for real-time management",
        "Enterprise security & observability",
    ];
    add_bullets(slide, &features, 2.2, BulletStyle { size: 20.0, ..Default::default() });

    add_text_box(slide, 0.5, 6.2, 9.0, 0.5)
        .first()
        .text("Open source: github.com/IBM/mcp-context-forge")
        .size(pt(18.0))
        .color(BLUE)
        .align(Alignment::Center);
}

pub(super) fn architecture(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "HIGH-LEVEL ARCHITECTURE", 0.5);

    add_diagram_box(
        slide,
        "AI Clients / Agents\n(Claude, watsonx, GPT, Custom)",
        Frame::inches(2.0, 1.5, 6.0, 0.9),
        DARK_BLUE,
        WHITE,
    );
    add_arrow_down(slide, 4.85, 2.45, 0.4);

    add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(1.0, 3.0, 8.0, 1.8), ACCENT_BLUE).line =
        Line::Solid(BLUE);
    add_text_box(slide, 1.0, 3.1, 8.0, 0.5)
        .first()
        .text("MCP CONTEXT FORGE")
        .size(pt(22.0))
        .bold()
        .color(WHITE)
        .align(Alignment::Center);

    let components = ["Registry", "Gateway", "Auth & RBAC", "Metrics"];
    for (i, component) in components.iter().enumerate() {
        add_diagram_box(
            slide,
            component,
            Frame::inches(1.3 + i as f64 * 2.0, 3.8, 1.7, 0.7),
            WHITE,
            DARK_BLUE,
        );
    }

    add_arrow_down(slide, 4.85, 4.85, 0.4);

    let services = ["MCP Servers", "REST APIs", "gRPC", "Legacy"];
    for (i, service) in services.iter().enumerate() {
        add_diagram_box(
            slide,
            service,
            Frame::inches(1.0 + i as f64 * 2.2, 5.5, 1.9, 0.7),
            LIGHT_GRAY,
            DARK_BLUE,
        );
    }
}

pub(super) fn capabilities(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "ENTERPRISE CAPABILITIES", 0.5);

    let capabilities: [(&str, [&str; 3]); 4] = [
        (
            "FEDERATION",
            [
                "Aggregate from multiple MCP servers",
                "Peer gateway discovery",
                "Redis-backed coordination",
            ],
        ),
        (
            "MULTI-TENANCY",
            [
                "Team-based access control",
                "Private/Team/Global visibility",
                "RBAC with roles",
            ],
        ),
        (
            "SECURITY",
            ["JWT, OAuth 2.0, SSO", "Multiple IdP support", "30+ security checks"],
        ),
        (
            "OBSERVABILITY",
            [
                "OpenTelemetry integration",
                "Prometheus metrics",
                "Distributed tracing",
            ],
        ),
    ];

    for (i, (name, items)) in capabilities.iter().enumerate() {
        let (col, row) = grid_cell(i, 2);
        add_panel(slide, 0.4 + col * 4.8, 1.5 + row * 2.8, name, items, 2.0);
    }
}

pub(super) fn tool_lifecycle(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "TOOL LIFECYCLE MANAGEMENT", 0.5);

    let steps = ["REGISTER", "ENABLE", "DISCOVER", "INVOKE", "AUDIT", "RETIRE"];
    for (i, step) in steps.iter().enumerate() {
        let (col, row) = grid_cell(i, 3);
        let x = 0.8 + col * 3.0;
        let y = 1.8 + row * 2.0;
        let fill = if row == 0.0 { BLUE } else { ACCENT_BLUE };

        add_labeled(
            slide,
            ShapeKind::RoundedRectangle,
            Frame::inches(x, y, 2.5, 1.0),
            fill,
            Label::bold(step, 20.0),
        );

        // Arrows only between boxes of the same row.
        if col < 2.0 {
            add_arrow_right(slide, Frame::inches(x + 2.5, y + 0.35, 0.4, 0.3), GRAY);
        }
    }

    add_statement(slide, "Full lifecycle visibility and control", 5.5, 20.0, DARK_BLUE);
}

pub(super) fn security(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "SECURITY ARCHITECTURE", 0.5);

    add_two_column_bullets(
        slide,
        Column {
            title: "AUTHENTICATION",
            items: &["JWT (HS256/RS256)", "OAuth 2.0", "SSO/OIDC", "Basic Auth"],
        },
        Column {
            title: "AUTHORIZATION",
            items: &["RBAC with roles", "Per-resource permissions", "Team isolation"],
        },
        1.4,
    );

    add_section_heading(slide, "SUPPORTED IDENTITY PROVIDERS", 4.2);

    let providers = [
        "GitHub",
        "Google",
        "Okta",
        "Keycloak",
        "IBM Verify",
        "MS Entra ID",
        "Generic OIDC",
    ];
    for (i, provider) in providers.iter().enumerate() {
        let (col, row) = grid_cell(i, 4);
        add_labeled(
            slide,
            ShapeKind::RoundedRectangle,
            Frame::inches(0.5 + col * 2.3, 4.8 + row * 0.7, 2.0, 0.5),
            LIGHT_GRAY,
            Label::bold(provider, 14.0).with_color(DARK_BLUE).regular(),
        );
    }
}

pub(super) fn federation(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "FEDERATION & MULTI-CLUSTER DEPLOYMENT", 0.5);

    add_diagram_box(
        slide,
        "REDIS CLUSTER\n(Coordination Layer)",
        Frame::inches(3.0, 1.5, 4.0, 0.9),
        DARK_BLUE,
        WHITE,
    );

    let gateways = [
        ("Gateway A", "US-East"),
        ("Gateway B", "EU-West"),
        ("Gateway C", "AP-South"),
    ];
    for (i, (name, region)) in gateways.iter().enumerate() {
        let x = 1.0 + i as f64 * 3.0;
        add_diagram_box(
            slide,
            &format!("{}\n({})", name, region),
            Frame::inches(x, 3.0, 2.5, 0.9),
            BLUE,
            WHITE,
        );
        add_connector(slide, x + 1.25, 2.4, 0.6, GRAY);
    }

    for i in 0..gateways.len() {
        let x = 1.0 + i as f64 * 3.0;
        add_diagram_box(
            slide,
            "Local MCP\nServers",
            Frame::inches(x, 4.5, 2.5, 0.9),
            LIGHT_GRAY,
            DARK_BLUE,
        );
        add_connector(slide, x + 1.25, 3.9, 0.6, GRAY);
    }

    add_statement(slide, "Unified tool discovery across all regions", 6.0, 20.0, BLUE);
}

pub(super) fn plugins(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "EXTENSIBLE PLUGIN SYSTEM", 0.5);

    add_two_column_bullets(
        slide,
        Column {
            title: "PRE-INVOKE HOOKS",
            items: &["Input validation", "Access control", "PII detection", "Rate limiting"],
        },
        Column {
            title: "POST-INVOKE HOOKS",
            items: &[
                "Result filtering",
                "Audit logging",
                "Response transform",
                "Metrics capture",
            ],
        },
        1.4,
    );

    add_section_heading(slide, "BUILT-IN PLUGINS", 4.5);

    let plugins = [
        ("PII Filter", "Detects/masks SSN, emails"),
        ("Regex Filter", "Pattern transformations"),
        ("Deny List", "Block specific terms"),
        ("Resource Filter", "Size limits, domain blocking"),
    ];
    for (i, (name, description)) in plugins.iter().enumerate() {
        let tf = add_text_box(slide, 0.5 + i as f64 * 2.3, 5.1, 2.2, 1.0);
        tf.word_wrap = true;
        tf.first().text(*name).size(pt(14.0)).bold().color(DARK_BLUE);
        tf.add_paragraph().text(*description).size(pt(12.0)).color(GRAY);
    }
}

pub(super) fn observability(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "OBSERVABILITY STACK", 0.5);

    add_diagram_box(
        slide,
        "OpenTelemetry",
        Frame::inches(3.5, 1.5, 3.0, 0.8),
        DARK_BLUE,
        WHITE,
    );

    let pillars: [(&str, &[&str]); 3] = [
        ("TRACES", &["Jaeger", "Zipkin", "Tempo", "Phoenix"]),
        ("METRICS", &["Prometheus", "Grafana"]),
        ("LOGS", &["Structured JSON", "Correlation IDs"]),
    ];
    for (i, (name, items)) in pillars.iter().enumerate() {
        let x = 0.8 + i as f64 * 3.2;
        add_labeled(
            slide,
            ShapeKind::RoundedRectangle,
            Frame::inches(x, 2.8, 2.8, 0.6),
            BLUE,
            Label::bold(name, 18.0),
        );

        let tf = add_text_box(slide, x, 3.5, 2.8, 2.0);
        fill_bullets(tf, items, |p| {
            p.size(pt(16.0)).color(GRAY).align(Alignment::Center);
        });
    }

    let features = [
        "Correlation IDs for end-to-end tracing",
        "LLM-specific metrics (tokens, costs, latency)",
        "Tool invocation metrics and error rates",
    ];
    add_bullets(slide, &features, 5.5, BulletStyle { size: 16.0, ..Default::default() });
}

pub(super) fn deployment(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "FLEXIBLE DEPLOYMENT OPTIONS", 0.5);

    let options: [(&str, [&str; 2]); 4] = [
        (
            "PYPI PACKAGE",
            ["pip install mcp-contextforge-gateway", "Quick local setup"],
        ),
        (
            "CONTAINER IMAGES",
            [
                "ghcr.io/ibm/mcp-context-forge",
                "Multi-arch: amd64, arm64, ppc64le",
            ],
        ),
        ("KUBERNETES", ["Helm charts with HPA", "Network policies, RBAC"]),
        ("IBM CLOUD", ["IBM Code Engine", "Serverless, auto-scaling"]),
    ];

    for (i, (name, items)) in options.iter().enumerate() {
        let (col, row) = grid_cell(i, 2);
        add_panel(slide, 0.4 + col * 4.8, 1.5 + row * 2.5, name, items, 1.5);
    }
}

pub(super) fn admin_ui(pres: &mut Presentation) {
    let slide = content_slide(pres);
    add_title(slide, "ADMIN UI: REAL-TIME MANAGEMENT", 0.5);

    add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(0.5, 1.5, 9.0, 4.5), LIGHT_GRAY).line =
        Line::Solid(GRAY);
    add_filled(slide, ShapeKind::Rectangle, Frame::inches(0.5, 1.5, 9.0, 0.6), DARK_BLUE);
    add_text_box(slide, 0.7, 1.55, 5.0, 0.5)
        .first()
        .text("MCP Context Forge Dashboard")
        .size(pt(18.0))
        .bold()
        .color(WHITE);

    let stats = [("Servers", "12"), ("Tools", "47"), ("Resources", "23"), ("Prompts", "8")];
    for (i, (label, value)) in stats.iter().enumerate() {
        let x = 0.8 + i as f64 * 2.2;
        add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(x, 2.3, 1.9, 1.2), WHITE);
        add_text_box(slide, x, 2.4, 1.9, 0.6)
            .first()
            .text(*value)
            .size(pt(32.0))
            .bold()
            .color(BLUE)
            .align(Alignment::Center);
        add_text_box(slide, x, 3.0, 1.9, 0.4)
            .first()
            .text(*label)
            .size(pt(14.0))
            .color(GRAY)
            .align(Alignment::Center);
    }

    add_filled(slide, ShapeKind::RoundedRectangle, Frame::inches(0.8, 3.8, 8.4, 1.8), WHITE);
    add_text_box(slide, 1.0, 3.9, 4.0, 0.4)
        .first()
        .text("Recent Activity")
        .size(pt(16.0))
        .bold()
        .color(DARK_BLUE);

    let activities = [
        "search_database invoked (2s ago)",
        "new_tool registered (5m ago)",
        "gateway_b connected (10m ago)",
    ];
    for (i, activity) in activities.iter().enumerate() {
        add_text_box(slide, 1.0, 4.4 + i as f64 * 0.4, 7.5, 0.4)
            .first()
            .text(format!("► {}", activity))
            .size(pt(14.0))
            .color(GRAY);
    }

    add_text_box(slide, 0.5, 6.2, 9.0, 0.4)
        .first()
        .text("Built with HTMX + Alpine.js for responsive updates")
        .size(pt(14.0))
        .color(GRAY)
        .align(Alignment::Center);
}
