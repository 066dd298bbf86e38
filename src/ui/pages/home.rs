//! Home page: hero carousel, testimonials and the FAQ accordion.
//!
//! Testimonials and FAQs disappear entirely when they are empty or failed
//! to load; the hero always has something to show.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::constants::{IMAGE_SYMBOL, VIDEO_SYMBOL};
use crate::domain::MediaKind;
use crate::state::HomePage;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE};
use crate::ui::components::carousel_dots;
use crate::ui::helpers::{create_border_block, muted_line};
use crate::ui::layout::calculate_home_layout;

const HEADLINE: &str = "Journeys planned by people who have travelled them";

pub fn render(frame: &mut Frame, area: Rect, page: &HomePage) {
    let layout = calculate_home_layout(area, page.show_testimonials());

    render_hero(frame, layout.hero, page);
    if page.show_testimonials() {
        render_testimonials(frame, layout.testimonials, page);
    }
    if page.show_faqs() {
        render_faqs(frame, layout.faqs, page);
    }
}

fn render_hero(frame: &mut Frame, area: Rect, page: &HomePage) {
    let block = create_border_block("Featured", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let muted = Style::default().fg(MUTED_COLOR);
    let mut lines = vec![
        Line::styled(HEADLINE, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
    ];

    match page.hero.active() {
        Some(media) => {
            let (symbol, kind) = match media.kind {
                MediaKind::Video => (VIDEO_SYMBOL, "Video"),
                MediaKind::Image => (IMAGE_SYMBOL, "Image"),
            };
            let position = page.hero.active_index().map_or(0, |index| index + 1);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{symbol} {kind}"),
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {position}/{}", page.hero.len()), muted),
                Span::styled(if page.hero.is_running() { "  ⟳" } else { "" }, muted),
            ]));
            lines.push(Line::styled(media.url.clone(), muted));
        }
        None => lines.push(muted_line("No featured media")),
    }

    lines.push(carousel_dots(page.hero.len(), page.hero.active_index()));
    if page.hero_slot.is_loading() {
        lines.push(muted_line("Loading…"));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_testimonials(frame: &mut Frame, area: Rect, page: &HomePage) {
    let block = create_border_block("What travellers say", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(testimonial) = page.testimonials.active() else {
        return;
    };

    let lines = vec![
        Line::raw(format!("“{}”", testimonial.message)),
        Line::styled(
            format!("- {}", testimonial.client_name),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::ITALIC),
        ),
        carousel_dots(page.testimonials.len(), page.testimonials.active_index()),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_faqs(frame: &mut Frame, area: Rect, page: &HomePage) {
    let block = create_border_block("Frequently Asked Questions", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    let mut cursor_line = 0;
    for (index, faq) in page.faqs.iter().enumerate() {
        let expanded = page.expanded_faq() == Some(index);
        let marker = if expanded { "▾" } else { "▸" };
        let style = if page.faq_cursor() == index {
            SELECTED_STYLE
        } else {
            Style::default()
        };

        if page.faq_cursor() == index {
            cursor_line = lines.len();
        }
        lines.push(Line::styled(format!("{marker} {}", faq.question), style));
        if expanded {
            lines.push(Line::styled(
                format!("  {}", faq.answer),
                Style::default().fg(MUTED_COLOR),
            ));
        }
    }

    let scroll = u16::try_from(cursor_line)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height.saturating_sub(2));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

// ============================================================================
// Tests
// ============================================================================
