//! Help popup showing all keybindings organized by context.
//!
//! Activated by '?' key, closed by Esc/Enter/?.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global Keys",
        &[
            ("q", "Quit"),
            ("?", "Toggle help"),
            ("1-7", "Go to page"),
            ("Tab", "Next page"),
            ("Esc", "Close overlay / back"),
            ("r", "Reload page"),
            ("o", "Open media in browser"),
        ],
    ),
    (
        "Home",
        &[
            ("← / →", "Previous / next slide"),
            ("↑ / ↓", "Move through FAQs"),
            ("Enter", "Expand or collapse FAQ"),
        ],
    ),
    (
        "Packages",
        &[
            ("↑ / ↓", "Move cursor"),
            ("← / →", "Previous / next category"),
            ("Enter", "Open package"),
            ("/", "Search by title or location"),
            ("m", "Load more"),
            ("c", "Clear search"),
        ],
    ),
    (
        "Package Detail",
        &[
            ("↑ / ↓", "Scroll"),
            ("← / →", "Select thumbnail"),
            ("Enter / g", "Open gallery"),
            ("Mouse", "Drag strip, click thumbnail"),
        ],
    ),
    (
        "Gallery",
        &[
            ("← / →", "Previous / next image"),
            ("Esc / g", "Close"),
            ("Mouse", "Click outside or [x] to close"),
        ],
    ),
];

// ============================================================================
// Public API
// ============================================================================

/// Renders the help popup with keybindings organized by section.
pub fn render(frame: &mut Frame, area: Rect) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (area.height * 8 / 10).max(20).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help (? to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_COLOR));

    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let mut lines = Vec::new();
    for (section_title, bindings) in HELP_SECTIONS {
        lines.push(Line::from(vec![Span::styled(
            *section_title,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )]));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(Color::White)),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::raw(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

// ============================================================================
// Tests
// ============================================================================
