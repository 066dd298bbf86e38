//! Carousel position indicator.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::constants::{ACTIVE_DOT, INACTIVE_DOT};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

/// One dot per item, the active one filled. Empty for fewer than two items.
#[must_use]
pub fn carousel_dots(len: usize, active: Option<usize>) -> Line<'static> {
    if len < 2 {
        return Line::default();
    }

    let spans = (0..len).flat_map(|index| {
        let dot = if Some(index) == active {
            Span::styled(ACTIVE_DOT, Style::default().fg(PRIMARY_COLOR))
        } else {
            Span::styled(INACTIVE_DOT, Style::default().fg(MUTED_COLOR))
        };
        [dot, Span::raw(" ")]
    });
    Line::from(spans.collect::<Vec<_>>())
}
