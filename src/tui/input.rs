//! Input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be triggered by key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start a generation
    Submit,
    /// Cancel the in-flight generation or clear the results pane
    Cancel,
    /// Switch focus between the niche and topic inputs
    NextField,
    /// Select the next content mode
    ModeNext,
    /// Select the previous content mode
    ModePrev,
    /// Cycle through script tones
    ToneCycle,
    /// Copy the current result to the clipboard
    CopyResult,
    /// Move cursor left
    Left,
    /// Move cursor right
    Right,
    /// Move to start of line
    Home,
    /// Move to end of line
    End,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Insert character
    Char(char),
    /// Scroll the results pane up
    ScrollUp,
    /// Scroll the results pane down
    ScrollDown,
    /// Clear the focused input
    ClearInput,
    /// No action
    None,
}

/// Convert a key event to an action
pub fn key_to_action(key: KeyEvent) -> Action {
    // Try each category of keys in order
    check_quit_keys(&key)
        .or_else(|| check_submit_keys(&key))
        .or_else(|| check_selector_keys(&key))
        .or_else(|| check_navigation_keys(&key))
        .or_else(|| check_editing_keys(&key))
        .or_else(|| check_control_keys(&key))
        .or_else(|| check_char_keys(&key))
        .unwrap_or(Action::None)
}

/// Check for quit key combinations
fn check_quit_keys(key: &KeyEvent) -> Option<Action> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Action::Quit),
        _ => None,
    }
}

/// Check for submit and cancel keys
fn check_submit_keys(key: &KeyEvent) -> Option<Action> {
    match key {
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            ..
        } => Some(Action::Submit),
        KeyEvent {
            code: KeyCode::Esc, ..
        } => Some(Action::Cancel),
        _ => None,
    }
}

/// Check for mode, tone and field selector keys
fn check_selector_keys(key: &KeyEvent) -> Option<Action> {
    match key {
        KeyEvent {
            code: KeyCode::Tab, ..
        }
        | KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => Some(Action::NextField),
        KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            ..
        } => Some(Action::ModePrev),
        KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            ..
        } => Some(Action::ModeNext),
        KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Action::ToneCycle),
        KeyEvent {
            code: KeyCode::Char('y'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Action::CopyResult),
        _ => None,
    }
}

/// Check for navigation keys
fn check_navigation_keys(key: &KeyEvent) -> Option<Action> {
    match key {
        KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            ..
        } => Some(Action::Left),
        KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            ..
        } => Some(Action::Right),
        KeyEvent {
            code: KeyCode::Home,
            ..
        } => Some(Action::Home),
        KeyEvent {
            code: KeyCode::End, ..
        } => Some(Action::End),
        KeyEvent {
            code: KeyCode::PageUp,
            ..
        } => Some(Action::ScrollUp),
        KeyEvent {
            code: KeyCode::PageDown,
            ..
        } => Some(Action::ScrollDown),
        _ => None,
    }
}

/// Check for editing keys
fn check_editing_keys(key: &KeyEvent) -> Option<Action> {
    match key {
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => Some(Action::Backspace),
        KeyEvent {
            code: KeyCode::Delete,
            ..
        } => Some(Action::Delete),
        _ => None,
    }
}

/// Check for control key combinations
fn check_control_keys(key: &KeyEvent) -> Option<Action> {
    match key {
        // Line navigation shortcuts
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Action::Home),
        KeyEvent {
            code: KeyCode::Char('e'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Action::End),
        // Clear input
        KeyEvent {
            code: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Action::ClearInput),
        _ => None,
    }
}

/// Check for character input keys
fn check_char_keys(key: &KeyEvent) -> Option<Action> {
    match key {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::SHIFT,
            ..
        } => Some(Action::Char(*c)),
        _ => None,
    }
}
