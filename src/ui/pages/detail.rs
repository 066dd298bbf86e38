//! Package detail page: summary, itinerary, policies and the thumbnail strip.
//!
//! The body is one scrolled paragraph; the strip sits below it whenever the
//! package has at least one displayable image.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::{ItineraryDay, PackageDetail, format_price};
use crate::state::PackageDetailPage;
use crate::theme::{ACCENT_COLOR, ERROR_COLOR, MUTED_COLOR, PRICE_COLOR, PRIMARY_COLOR};
use crate::ui::components::render_strip;
use crate::ui::helpers::{create_border_block, muted_line};
use crate::ui::layout::calculate_detail_layout;

pub fn render(frame: &mut Frame, area: Rect, page: &PackageDetailPage) {
    let Some(detail) = page.detail() else {
        render_placeholder(frame, area, page);
        return;
    };

    let layout = calculate_detail_layout(area, !page.gallery.is_empty());
    let block = create_border_block(&detail.summary.title, true);
    frame.render_widget(
        Paragraph::new(body_lines(detail))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((page.scroll(), 0)),
        layout.body,
    );

    if let Some(strip_area) = layout.strip {
        let labels: Vec<&str> = page.gallery.items().iter().map(|image| image.label()).collect();
        let strip = page.gallery.strip();
        render_strip(frame, strip_area, strip, &labels, strip.selected());
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, page: &PackageDetailPage) {
    let lines = if page.is_missing() {
        vec![
            Line::styled(
                "Package not found",
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            muted_line(format!("No package with id \"{}\"", page.id)),
            muted_line("Press Esc to go back"),
        ]
    } else if let Some(error) = page.slot.state().error() {
        vec![
            Line::styled("Couldn't load this package", Style::default().fg(ERROR_COLOR)),
            muted_line(error.to_string()),
            muted_line("Press r to retry"),
        ]
    } else {
        vec![muted_line("Loading package…")]
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(create_border_block("Package", false))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn heading(text: &str) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default()
            .fg(ACCENT_COLOR)
            .add_modifier(Modifier::BOLD),
    )
}

fn bullets(lines: &mut Vec<Line<'static>>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(heading(title));
    lines.extend(items.iter().map(|item| Line::raw(format!("  • {item}"))));
    lines.push(Line::raw(""));
}

fn paragraph(lines: &mut Vec<Line<'static>>, title: &str, text: Option<&str>) {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return;
    };
    lines.push(heading(title));
    lines.push(Line::raw(text.to_string()));
    lines.push(Line::raw(""));
}

fn day_lines(day: &ItineraryDay) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_COLOR);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("Day {}", day.day),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}", day.title)),
    ])];

    if let Some(route) = &day.route {
        lines.push(Line::styled(format!("  Route: {route}"), muted));
    }
    if !day.meal_plan.is_empty() {
        lines.push(Line::styled(format!("  Meals: {}", day.meal_plan), muted));
    }
    lines.extend(
        day.activities
            .iter()
            .map(|activity| Line::raw(format!("  • {activity}"))),
    );
    if let Some(notes) = &day.notes {
        lines.push(Line::styled(format!("  Note: {notes}"), muted));
    }
    lines
}

fn body_lines(detail: &PackageDetail) -> Vec<Line<'static>> {
    let summary = &detail.summary;
    let muted = Style::default().fg(MUTED_COLOR);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(summary.location.clone(), muted),
            Span::styled(
                if summary.duration.is_empty() {
                    String::new()
                } else {
                    format!("  ·  {}", summary.duration)
                },
                muted,
            ),
        ]),
        Line::styled(
            format_price(summary.price),
            Style::default()
                .fg(PRICE_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];

    if !summary.description.is_empty() {
        lines.push(Line::raw(summary.description.clone()));
        lines.push(Line::raw(""));
    }

    if !detail.itinerary.is_empty() {
        lines.push(heading("Itinerary"));
        for day in &detail.itinerary {
            lines.extend(day_lines(day));
        }
        lines.push(Line::raw(""));
    }

    bullets(&mut lines, "Inclusions", &detail.inclusions);
    bullets(&mut lines, "Exclusions", &detail.exclusions);
    paragraph(&mut lines, "Booking", detail.booking_info.as_deref());
    paragraph(&mut lines, "Cancellation policy", detail.cancellation_policy.as_deref());
    lines
}

// ============================================================================
// Tests
// ============================================================================
