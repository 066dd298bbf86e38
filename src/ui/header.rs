//! Header rendering for the tourfolio TUI
//!
//! Renders the brand logo on the top border and the page tabs below it.
//! The logo shimmers while the page is fetching.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{App, Route};
use crate::theme::{BORDER_STYLE, HIGHLIGHT_STYLE, MUTED_COLOR};

/// Short tab labels, in [`Route::TABS`] order.
const TAB_LABELS: [&str; 7] = [
    "Home", "Packages", "Kerala", "About", "Services", "Pricing", "Contact",
];

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let logo = if app.page.is_loading() {
        create_animated_logo(app.animation_tick)
    } else {
        create_static_logo()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(logo)
        .title_top(breadcrumb(app).right_aligned());
    frame.render_widget(block.clone(), area);

    if area.height <= 2 {
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(tab_line(app.route())), inner);
}

/// The current path, marked when Escape can go back.
fn breadcrumb(app: &App) -> Line<'static> {
    let path = app.route().path();
    let text = if app.history.can_go_back() {
        format!(" ◂ {path} ")
    } else {
        format!(" {path} ")
    };
    Line::styled(text, Style::default().fg(MUTED_COLOR))
}

/// The numbered tab bar with the current route's tab highlighted.
fn tab_line(route: &Route) -> Line<'static> {
    let active = route.tab_index();
    let mut spans = Vec::with_capacity(TAB_LABELS.len() * 2);

    for (index, label) in TAB_LABELS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", BORDER_STYLE));
        }
        let style = if active == Some(index) {
            HIGHLIGHT_STYLE
        } else {
            Style::default().fg(MUTED_COLOR)
        };
        spans.push(Span::styled(format!("{} {label}", index + 1), style));
    }

    Line::from(spans)
}

/// Create the animated logo with shimmer effect
fn create_animated_logo(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;

    let bracket_glow = ((time * 0.8).sin() + 1.0) / 2.0;
    let tour_glow = ((time * 0.8 + 0.5).sin() + 1.0) / 2.0;
    let folio_glow = ((time * 0.8 + 1.0).sin() + 1.0) / 2.0;

    let tour_color = Color::Rgb(
        (50.0 * tour_glow) as u8,
        (120.0 + tour_glow * 135.0) as u8,
        (80.0 * tour_glow) as u8,
    );
    let folio_color = Color::Rgb(
        (100.0 * folio_glow) as u8,
        (180.0 + folio_glow * 75.0) as u8,
        (140.0 + folio_glow * 115.0) as u8,
    );

    let bracket_intensity = (100.0 + bracket_glow * 155.0) as u8;
    let bracket_color = Color::Rgb(bracket_intensity, bracket_intensity, bracket_intensity);

    Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(
            "tour",
            Style::default().fg(tour_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "folio",
            Style::default().fg(folio_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(bracket_color)),
    ])
}

/// Create the static logo (nothing loading)
fn create_static_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "tour".green().bold(),
        "folio".blue().bold(),
        "]".into(),
    ])
}

// ============================================================================
// Tests
// ============================================================================
