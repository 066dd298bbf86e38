//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by a pure function of the
//! key and the current [`InputContext`]; the app then executes the command.
//! This keeps every keybinding testable without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = map_key(key_event, &context);
//! app.execute_command(command)?;
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Home, static and not-found pages.
    Main,
    /// The package catalog.
    PackageList,
    /// Typing into the catalog search box.
    SearchInput,
    /// A package detail page with the gallery closed.
    PackageDetail,
    /// The modal gallery is open.
    Gallery,
    /// The full-page error fallback is shown.
    ErrorPage,
    /// The keybinding help overlay is shown.
    HelpPopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Re-mount the current route, clearing any error page.
    Retry,
    ToggleHelp,

    // === Navigation ===
    /// Jump to the n-th top-level page (0-based).
    GoToTab(usize),
    NextTab,
    /// Close the topmost overlay, or go back when none is open.
    Dismiss,
    MoveUp,
    MoveDown,
    /// Previous item: hero slide, gallery image, thumbnail or category.
    Previous,
    /// Next item: hero slide, gallery image, thumbnail or category.
    Next,
    Select,

    // === Catalog ===
    OpenSearch,
    LoadMore,
    ClearSearch,

    // === Search Input ===
    TypeChar(char),
    Backspace,
    SubmitSearch,
    CancelSearch,

    // === Media ===
    OpenGallery,
    OpenInBrowser,

    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to a command for the given context.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return match context {
            InputContext::SearchInput => AppCommand::CancelSearch,
            _ => AppCommand::Quit,
        };
    }

    match context {
        InputContext::Main => map_main_keys(key),
        InputContext::PackageList => map_package_list_keys(key),
        InputContext::SearchInput => map_search_input_keys(key),
        InputContext::PackageDetail => map_package_detail_keys(key),
        InputContext::Gallery => map_gallery_keys(key),
        InputContext::ErrorPage => map_error_page_keys(key),
        InputContext::HelpPopup => map_help_keys(key),
    }
}

/// Keys shared by every page context.
fn map_page_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::Quit,
        KeyCode::Char('?') => AppCommand::ToggleHelp,
        KeyCode::Char('r') => AppCommand::Retry,
        KeyCode::Char('o') => AppCommand::OpenInBrowser,
        KeyCode::Char(c @ '1'..='7') => AppCommand::GoToTab(c as usize - '1' as usize),
        KeyCode::Tab => AppCommand::NextTab,
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => AppCommand::Previous,
        KeyCode::Right | KeyCode::Char('l') => AppCommand::Next,
        KeyCode::Enter => AppCommand::Select,
        _ => AppCommand::Noop,
    }
}

fn map_main_keys(key: KeyEvent) -> AppCommand {
    map_page_keys(key)
}

fn map_package_list_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('/') => AppCommand::OpenSearch,
        KeyCode::Char('m') => AppCommand::LoadMore,
        KeyCode::Char('c') => AppCommand::ClearSearch,
        _ => map_page_keys(key),
    }
}

fn map_search_input_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::CancelSearch,
        KeyCode::Enter => AppCommand::SubmitSearch,
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Up => AppCommand::MoveUp,
        KeyCode::Down => AppCommand::MoveDown,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        _ => AppCommand::Noop,
    }
}

fn map_package_detail_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('g') => AppCommand::OpenGallery,
        _ => map_page_keys(key),
    }
}

fn map_gallery_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Char('g') => AppCommand::Dismiss,
        KeyCode::Left | KeyCode::Char('h') => AppCommand::Previous,
        KeyCode::Right | KeyCode::Char('l') => AppCommand::Next,
        KeyCode::Char('o') => AppCommand::OpenInBrowser,
        KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

fn map_error_page_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => AppCommand::Retry,
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

fn map_help_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppCommand::ToggleHelp,
        KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    /// Helper to create a key event for testing.
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    mod page_mapping_tests {
        use super::*;

        #[rstest]
        #[case(KeyCode::Char('q'), AppCommand::Quit)]
        #[case(KeyCode::Char('1'), AppCommand::GoToTab(0))]
        #[case(KeyCode::Char('7'), AppCommand::GoToTab(6))]
        #[case(KeyCode::Char('8'), AppCommand::Noop)]
        #[case(KeyCode::Tab, AppCommand::NextTab)]
        #[case(KeyCode::Left, AppCommand::Previous)]
        #[case(KeyCode::Right, AppCommand::Next)]
        #[case(KeyCode::Up, AppCommand::MoveUp)]
        #[case(KeyCode::Down, AppCommand::MoveDown)]
        #[case(KeyCode::Enter, AppCommand::Select)]
        #[case(KeyCode::Esc, AppCommand::Dismiss)]
        #[case(KeyCode::Char('o'), AppCommand::OpenInBrowser)]
        #[case(KeyCode::Char('r'), AppCommand::Retry)]
        #[case(KeyCode::Char('?'), AppCommand::ToggleHelp)]
        #[case(KeyCode::F(1), AppCommand::Noop)]
        fn test_main_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(map_key(key_event(code), &InputContext::Main), expected);
        }

        #[rstest]
        #[case(KeyCode::Char('/'), AppCommand::OpenSearch)]
        #[case(KeyCode::Char('m'), AppCommand::LoadMore)]
        #[case(KeyCode::Char('c'), AppCommand::ClearSearch)]
        #[case(KeyCode::Enter, AppCommand::Select)]
        #[case(KeyCode::Char('2'), AppCommand::GoToTab(1))]
        fn test_package_list_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(map_key(key_event(code), &InputContext::PackageList), expected);
        }

        #[test]
        fn test_catalog_keys_are_inert_elsewhere() {
            assert_eq!(
                map_key(key_event(KeyCode::Char('m')), &InputContext::Main),
                AppCommand::Noop
            );
            assert_eq!(
                map_key(key_event(KeyCode::Char('g')), &InputContext::Main),
                AppCommand::Noop
            );
        }

        #[test]
        fn test_g_opens_gallery_on_detail() {
            assert_eq!(
                map_key(key_event(KeyCode::Char('g')), &InputContext::PackageDetail),
                AppCommand::OpenGallery
            );
        }

        #[test]
        fn test_ctrl_c_quits() {
            assert_eq!(map_key(ctrl('c'), &InputContext::PackageDetail), AppCommand::Quit);
            assert_eq!(map_key(ctrl('c'), &InputContext::Main), AppCommand::Quit);
        }
    }

    mod search_input_mapping_tests {
        use super::*;

        #[test]
        fn test_chars_are_typed_not_bound() {
            for c in ['q', 'm', '/', '1', ' '] {
                assert_eq!(
                    map_key(key_event(KeyCode::Char(c)), &InputContext::SearchInput),
                    AppCommand::TypeChar(c)
                );
            }
        }

        #[rstest]
        #[case(KeyCode::Esc, AppCommand::CancelSearch)]
        #[case(KeyCode::Enter, AppCommand::SubmitSearch)]
        #[case(KeyCode::Backspace, AppCommand::Backspace)]
        fn test_editing_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(map_key(key_event(code), &InputContext::SearchInput), expected);
        }

        #[test]
        fn test_ctrl_c_cancels_search() {
            assert_eq!(map_key(ctrl('c'), &InputContext::SearchInput), AppCommand::CancelSearch);
        }
    }

    mod overlay_mapping_tests {
        use super::*;

        #[rstest]
        #[case(KeyCode::Esc, AppCommand::Dismiss)]
        #[case(KeyCode::Left, AppCommand::Previous)]
        #[case(KeyCode::Right, AppCommand::Next)]
        #[case(KeyCode::Char('o'), AppCommand::OpenInBrowser)]
        #[case(KeyCode::Char('1'), AppCommand::Noop)]
        #[case(KeyCode::Up, AppCommand::Noop)]
        fn test_gallery_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(map_key(key_event(code), &InputContext::Gallery), expected);
        }

        #[rstest]
        #[case(KeyCode::Char('r'), AppCommand::Retry)]
        #[case(KeyCode::Enter, AppCommand::Retry)]
        #[case(KeyCode::Esc, AppCommand::Dismiss)]
        #[case(KeyCode::Tab, AppCommand::Noop)]
        fn test_error_page_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(map_key(key_event(code), &InputContext::ErrorPage), expected);
        }

        #[test]
        fn test_help_closes_on_esc_or_question_mark() {
            for code in [KeyCode::Esc, KeyCode::Char('?'), KeyCode::Enter] {
                assert_eq!(map_key(key_event(code), &InputContext::HelpPopup), AppCommand::ToggleHelp);
            }
        }
    }
}
