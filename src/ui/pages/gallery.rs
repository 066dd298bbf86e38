//! Modal gallery drawn over the whole screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::constants::IMAGE_SYMBOL;
use crate::state::PackageDetailPage;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::components::render_strip;
use crate::ui::helpers::{create_popup_block, muted_line};
use crate::ui::layout::calculate_gallery_layout;

/// Draws the open gallery. Does nothing while it is closed.
pub fn render(frame: &mut Frame, screen: Rect, page: &PackageDetailPage) {
    let (Some(index), Some(image)) = (page.gallery.current_index(), page.gallery.current()) else {
        return;
    };
    let layout = calculate_gallery_layout(screen);
    let title = page
        .detail()
        .map_or("Gallery", |detail| detail.summary.title.as_str());

    frame.render_widget(Clear, layout.modal);
    frame.render_widget(create_popup_block(title), layout.modal);
    frame.render_widget(
        Paragraph::new("[x]").style(
            Style::default()
                .fg(ERROR_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        layout.close,
    );

    let mut lines = vec![
        Line::raw(""),
        Line::styled(
            format!("{IMAGE_SYMBOL}  {}", image.label()),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(image.url.clone(), Style::default().fg(MUTED_COLOR)),
    ];
    if let Some(caption) = image.caption.as_deref().filter(|caption| *caption != image.label()) {
        lines.push(Line::raw(caption.to_string()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("{} / {}", index + 1, page.gallery.len())));
    lines.push(muted_line("←/→ browse  ·  o open in browser  ·  Esc close"));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        layout.image,
    );

    let labels: Vec<&str> = page.gallery.items().iter().map(|image| image.label()).collect();
    render_strip(frame, layout.strip, page.gallery.strip(), &labels, Some(index));
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::state::GalleryEvent;
    use crate::test_utils::PackageMother;
    use crate::ui::tests::buffer_text;

    fn draw(page: &PackageDetailPage) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), page))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn loaded() -> PackageDetailPage {
        let mut page = PackageDetailPage::new("b");
        let ticket = page.slot.begin();
        page.apply_detail(ticket, Ok(PackageMother::kerala_detail()));
        page
    }

    #[test]
    fn test_closed_gallery_draws_nothing() {
        let content = draw(&loaded());
        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_open_gallery_shows_current_image() {
        let mut page = loaded();
        page.open_gallery();
        let content = draw(&page);
        assert!(content.contains("Kerala Backwaters"));
        assert!(content.contains("[x]"));
        assert!(content.contains("▣  Gallery image 0"));
        assert!(content.contains("https://cdn.example/gallery-0.jpg"));
        assert!(content.contains("1 / 3"));
    }

    #[test]
    fn test_next_moves_position() {
        let mut page = loaded();
        page.open_gallery();
        page.gallery_event(GalleryEvent::Next);
        page.gallery_event(GalleryEvent::Next);
        let content = draw(&page);
        assert!(content.contains("3 / 3"));
        assert!(content.contains("gallery-2.jpg"));
    }
}
