//! UI presentation state: help overlay, toasts, the error page and the
//! screen geometry used for mouse hit-testing.

use ratatui::layout::Rect;

use crate::constants::TOAST_TICKS;

// ============================================================================
// Toasts
// ============================================================================

/// Outcome a toast reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// A short-lived notice with its remaining lifetime in ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    ticks: u8,
}

// ============================================================================
// UI State
// ============================================================================

/// Presentation concerns that outlive any single page.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new();
/// ui.show_toast(ToastKind::Success, "Opened in browser");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the keybinding help overlay is shown.
    pub show_help: bool,
    toast: Option<Toast>,
    /// Full-page fallback set when a command fails.
    pub fatal: Option<String>,
    /// Terminal area at the last draw.
    pub screen: Rect,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    /// Shows a toast for [`TOAST_TICKS`] ticks, replacing any current one.
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
            ticks: TOAST_TICKS,
        });
    }

    /// Counts the toast down. Returns `true` when it expired on this tick.
    pub fn tick_toast(&mut self) -> bool {
        let Some(toast) = self.toast.as_mut() else {
            return false;
        };
        toast.ticks = toast.ticks.saturating_sub(1);
        if toast.ticks == 0 {
            self.toast = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    // ========================================================================
    // Error Boundary
    // ========================================================================

    /// Replaces the page with the error fallback.
    pub fn set_fatal(&mut self, message: impl Into<String>) {
        self.fatal = Some(message.into());
    }

    pub fn clear_fatal(&mut self) -> bool {
        self.fatal.take().is_some()
    }

    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.fatal.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast().is_none());

        ui.show_toast(ToastKind::Success, "Opened in browser");
        let toast = ui.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Opened in browser");

        for _ in 1..TOAST_TICKS {
            assert!(!ui.tick_toast());
        }
        assert!(ui.tick_toast());
        assert!(ui.toast().is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_new_toast_replaces_current() {
        let mut ui = UiState::new();
        ui.show_toast(ToastKind::Success, "Opened in browser");
        ui.tick_toast();
        ui.show_toast(ToastKind::Failure, "Nothing to open here");
        assert_eq!(ui.toast().map(|t| t.kind), Some(ToastKind::Failure));
    }

    #[test]
    fn test_fatal_set_and_clear() {
        let mut ui = UiState::new();
        assert!(!ui.clear_fatal());

        ui.set_fatal("boom");
        assert!(ui.has_fatal());
        assert!(ui.clear_fatal());
        assert!(!ui.has_fatal());
    }

    #[test]
    fn test_help_toggles() {
        let mut ui = UiState::new();
        ui.toggle_help();
        assert!(ui.show_help);
        ui.toggle_help();
        assert!(!ui.show_help);
    }
}
