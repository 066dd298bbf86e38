//! Full-page fallbacks: the error boundary and unknown routes.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::theme::{ERROR_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::{create_border_block, muted_line};

/// Shown in place of the page body after an unexpected failure.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            "Something went wrong",
            Style::default()
                .fg(ERROR_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(message.to_string()),
        Line::raw(""),
        muted_line("Press r to retry or Esc to go back"),
    ];
    render_centered(frame, area, "Error", lines);
}

/// Shown for routes that match no page.
pub fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            "Page not found",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        muted_line(format!("Nothing lives at {path}")),
        muted_line("Press 1 for Home or 2 for Packages"),
    ];
    render_centered(frame, area, "404", lines);
}

fn render_centered(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    frame.render_widget(
        Paragraph::new(lines)
            .block(create_border_block(title, false))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::ui::tests::buffer_text;

    fn draw(render_fn: impl FnOnce(&mut Frame, Rect)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render_fn(frame, frame.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_error_page_shows_message_and_retry() {
        let content = draw(|frame, area| render_error(frame, area, "Failed to open the browser"));
        assert!(content.contains("Something went wrong"));
        assert!(content.contains("Failed to open the browser"));
        assert!(content.contains("Press r to retry"));
    }

    #[test]
    fn test_not_found_names_the_path() {
        let content = draw(|frame, area| render_not_found(frame, area, "/package/x/y"));
        assert!(content.contains("Page not found"));
        assert!(content.contains("Nothing lives at /package/x/y"));
    }
}
