//! Informational pages: headings with wrapped body text.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::state::StaticPage;
use crate::theme::ACCENT_COLOR;
use crate::ui::helpers::create_border_block;

pub fn render(frame: &mut Frame, area: Rect, page: StaticPage) {
    let block = create_border_block(page.title(), false);

    let mut lines = Vec::new();
    for section in page.sections() {
        lines.push(Line::styled(
            section.heading,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(section.body));
        lines.push(Line::raw(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
