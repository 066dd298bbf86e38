//! Package catalog page: search box, paginated list and status line.
//!
//! The list is a window of the visible packages kept around the cursor, with
//! a scrollbar when the revealed packages overflow the panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::constants::{Dimensions, PACKAGE_ROW_HEIGHT};
use crate::domain::{PackageCategory, PackageSummary, format_price};
use crate::state::{ListView, PackagesPage};
use crate::theme::{MUTED_COLOR, PRICE_COLOR, PRIMARY_COLOR, SELECTED_STYLE};
use crate::ui::helpers::{create_border_block, muted_line};

pub fn render(frame: &mut Frame, area: Rect, page: &PackagesPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_search(frame, chunks[0], page);
    render_list(frame, chunks[1], page);
    render_status(frame, chunks[2], page);
}

fn render_search(frame: &mut Frame, area: Rect, page: &PackagesPage) {
    let block = create_border_block("Search", page.is_searching());
    let line = match page.search_input() {
        Some(input) => Line::from(vec![
            Span::raw(input.to_string()),
            Span::styled("█", Style::default().fg(PRIMARY_COLOR)),
        ]),
        None if !page.list.query().is_empty() => Line::raw(page.list.query().to_string()),
        None => muted_line("Press / to search by title or location"),
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(frame: &mut Frame, area: Rect, page: &PackagesPage) {
    let title = match page.category {
        PackageCategory::All => page.category.as_str().to_string(),
        category => format!("{category} Packages"),
    };
    let block = create_border_block(&title, !page.is_searching());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = match page.list.view() {
        ListView::Empty => {
            let message = if page.slot.is_loading() {
                "Loading packages…"
            } else {
                "No packages available right now."
            };
            frame.render_widget(Paragraph::new(muted_line(message)).alignment(Alignment::Center), inner);
            return;
        }
        ListView::NoResults { query } => {
            let clear_hint = if page.is_searching() {
                "Press Esc to clear the search"
            } else {
                "Press c to clear the search"
            };
            let lines = vec![
                muted_line(format!("No packages match \"{query}\"")),
                muted_line(clear_hint),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
            return;
        }
        ListView::Items { visible, .. } => visible,
    };

    let per_view = Dimensions::default().packages_per_view(inner.height).max(1);
    let cursor = page.cursor().min(visible.len().saturating_sub(1));
    let start = (cursor + 1).saturating_sub(per_view);
    let end = (start + per_view).min(visible.len());

    let items: Vec<ListItem> = visible[start..end]
        .iter()
        .enumerate()
        .map(|(offset, package)| package_item(package, start + offset == cursor))
        .collect();

    let mut state = ListState::default();
    state.select(Some(cursor - start));
    frame.render_stateful_widget(List::new(items), inner, &mut state);

    if visible.len() > per_view {
        let row_height = usize::from(PACKAGE_ROW_HEIGHT);
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .symbols(scrollbar::VERTICAL)
            .track_symbol(None)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(MUTED_COLOR))
            .track_style(Style::default().fg(Color::DarkGray));
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(visible.len() * row_height)
            .viewport_content_length(per_view * row_height)
            .position(start * row_height);
        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}

fn package_item(package: &PackageSummary, selected: bool) -> ListItem<'static> {
    let indicator = if selected { "▶" } else { " " };
    let mut details = vec![package.location.clone(), package.duration.clone()];
    details.retain(|text| !text.is_empty());

    ListItem::new(vec![
        Line::from(vec![
            Span::raw(format!("{indicator} ")),
            Span::styled(
                package.title.clone(),
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format_price(package.price), Style::default().fg(PRICE_COLOR)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(details.join(" · "), Style::default().fg(MUTED_COLOR)),
        ]),
        Line::from(""),
    ])
    .style(if selected {
        SELECTED_STYLE
    } else {
        Style::default()
    })
}

fn render_status(frame: &mut Frame, area: Rect, page: &PackagesPage) {
    let ListView::Items {
        visible,
        has_more,
        total,
    } = page.list.view()
    else {
        return;
    };

    let mut text = format!("Showing {} of {total}", visible.len());
    if has_more {
        text.push_str("  ·  m: load more");
    }
    frame.render_widget(
        Paragraph::new(muted_line(text)).alignment(Alignment::Right),
        area,
    );
}

// ============================================================================
// Tests
// ============================================================================
