//! Horizontally scrolled row of gallery thumbnails.
//!
//! Thumbnails are placed at [`DraggableStrip::item_start`] and clipped to the
//! viewport, so a drag shows partial thumbnails at either edge.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::constants::{IMAGE_SYMBOL, THUMB_WIDTH};
use crate::state::DraggableStrip;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::strip_viewport;

/// Draws the bordered strip into `area`; `labels` holds one entry per item.
pub fn render_strip(
    frame: &mut Frame,
    area: Rect,
    strip: &DraggableStrip,
    labels: &[&str],
    highlighted: Option<usize>,
) {
    let title = if strip.is_draggable() {
        format!("Gallery ({}) ◂ drag ▸", labels.len())
    } else {
        format!("Gallery ({})", labels.len())
    };
    frame.render_widget(create_border_block(&title, strip.is_dragging()), area);

    let viewport = strip_viewport(area);
    let width = f32::from(viewport.width);
    for (index, label) in labels.iter().enumerate() {
        let start = strip.item_start(index);
        let end = start + f32::from(THUMB_WIDTH);
        let visible_start = start.max(0.0);
        let visible_end = end.min(width);
        if visible_end <= visible_start {
            continue;
        }

        let rect = Rect::new(
            viewport.x + visible_start as u16,
            viewport.y,
            (visible_end - visible_start) as u16,
            viewport.height,
        );
        let clipped = (visible_start - start) as u16;
        frame.render_widget(thumbnail(index, label, highlighted == Some(index), clipped), rect);
    }
}

fn thumbnail(index: usize, label: &str, highlighted: bool, clipped: u16) -> Paragraph<'static> {
    let style = if highlighted {
        SELECTED_STYLE.fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    };
    let width = usize::from(THUMB_WIDTH);
    let lines = vec![
        Line::raw(format!("{:^width$}", format!("{IMAGE_SYMBOL} {}", index + 1))),
        Line::raw(format!("{:^width$}", truncate(label, width.saturating_sub(2)))),
    ];
    Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Left)
        .scroll((0, clipped))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
