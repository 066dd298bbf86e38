//! Toast badge drawn just above the footer, right-aligned.
//!
//! The badge is a coloured marker cell followed by the message. It never
//! takes focus; [`crate::state::UiState`] removes it when its countdown ends.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::constants::FOOTER_HEIGHT;
use crate::state::{Toast, ToastKind};
use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

/// Columns kept free to the right of the badge.
const RIGHT_MARGIN: u16 = 2;

/// Draws `toast` on the row above the footer.
pub fn render_toast(frame: &mut Frame, screen: Rect, toast: &Toast) {
    let line = badge_line(toast);
    let Some(area) = badge_area(screen, line.width()) else {
        return;
    };
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line), area);
}

fn badge_line(toast: &Toast) -> Line<'static> {
    let (marker, color) = match toast.kind {
        ToastKind::Success => ("✓", SUCCESS_COLOR),
        ToastKind::Failure => ("✗", ERROR_COLOR),
    };
    Line::from(vec![
        Span::styled(
            format!(" {marker} "),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", toast.message),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
    ])
}

/// One row above the footer; `None` when the screen has no room for it.
fn badge_area(screen: Rect, width: usize) -> Option<Rect> {
    let bottom = screen.bottom().checked_sub(FOOTER_HEIGHT + 1)?;
    if bottom < screen.y {
        return None;
    }
    let width = u16::try_from(width)
        .unwrap_or(u16::MAX)
        .min(screen.width.saturating_sub(RIGHT_MARGIN));
    if width == 0 {
        return None;
    }
    let x = screen.right().saturating_sub(width + RIGHT_MARGIN).max(screen.x);
    Some(Rect::new(x, bottom, width, 1))
}

// ============================================================================
// Tests
// ============================================================================
