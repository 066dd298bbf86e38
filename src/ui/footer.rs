//! Footer rendering module for the tourfolio TUI.
//!
//! Shows the keys that do something in the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => "q:Quit  1-7:Pages  ←→:Slides  ↑↓:Move  Enter:Select  Esc:Back  ?:Help",
        InputContext::PackageList => "↑↓:Move  Enter:Open  /:Search  m:More  c:Clear  ←→:Category  ?:Help",
        InputContext::SearchInput => "Type to filter  Enter:Done  Esc:Cancel",
        InputContext::PackageDetail => "↑↓:Scroll  ←→:Thumbnail  g:Gallery  o:Open  Esc:Back  ?:Help",
        InputContext::Gallery => "←→:Image  Esc:Close  o:Open  Click outside to close",
        InputContext::ErrorPage => "r:Retry  Esc:Back  q:Quit",
        InputContext::HelpPopup => "Esc:Close help",
    }
}

// ============================================================================
// Tests
// ============================================================================
