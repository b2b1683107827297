//! Input state and key handling for the date field.
//!
//! This module owns the date-entry buffer and handles character-level key
//! events. The buffer is rebuilt through [`format_input`] on every
//! keystroke, so it only ever holds a partial or complete `DD/MM/YYYY`
//! entry with the cursor pinned to the end.

use agegate_core::format_input;

use crate::{App, GateAction, Screen};

/// Key input events from the front-end.
///
/// Decouples the gate logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key: submit the entry, or acknowledge the interstitial.
    Enter,
    /// Backspace key (drop the last digit).
    Backspace,
    /// Delete key. No effect: the cursor is pinned to the end of the field.
    Delete,
    /// Escape key (quit).
    Esc,
}

/// Input state for the date field.
///
/// Manages the entry buffer and routes submit/acknowledge keys to the
/// [`App`] API.
#[derive(Debug, Default)]
pub struct InputState {
    /// Formatted entry buffer.
    buffer: String,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the entry buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor column. Always the end of the buffer; the fixed-format field
    /// has no interior editing.
    pub fn cursor(&self) -> usize {
        self.buffer.len()
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for keys with no effect in
    /// the current screen).
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<GateAction> {
        match key {
            KeyInput::Char(c) => {
                if !app.gate_input_active() {
                    return vec![];
                }
                app.clear_rejection();
                self.buffer.push(c);
                self.buffer = format_input(&self.buffer);
                vec![GateAction::Render]
            },
            KeyInput::Backspace => {
                if !app.gate_input_active() {
                    return vec![];
                }
                app.clear_rejection();
                let mut digits: String =
                    self.buffer.chars().filter(char::is_ascii_digit).collect();
                digits.pop();
                self.buffer = format_input(&digits);
                vec![GateAction::Render]
            },
            KeyInput::Delete => vec![],
            KeyInput::Enter => self.handle_enter(app),
            KeyInput::Esc => app.quit(),
        }
    }

    /// Handle Enter: submit from the gate, acknowledge from the
    /// interstitial.
    fn handle_enter(&mut self, app: &mut App) -> Vec<GateAction> {
        match app.screen() {
            Screen::Gate => {
                let actions = app.submit(self.buffer.as_str());
                // The entry survives a rejection so the visitor can fix it.
                if app.screen() == Screen::Interstitial {
                    self.buffer.clear();
                }
                actions
            },
            Screen::Interstitial => app.acknowledge(),
            Screen::Content => vec![],
        }
    }

    /// Type a string of characters, returning the accumulated actions.
    ///
    /// Test convenience mirroring a visitor typing into the field.
    pub fn type_str(&mut self, text: &str, app: &mut App) -> Vec<GateAction> {
        text.chars().flat_map(|c| self.handle_key(KeyInput::Char(c), app)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GateEvent;

    fn gated_app() -> App {
        let mut app = App::new(2026);
        let _ = app.start();
        let _ = app.handle(GateEvent::UnlockMissing);
        app
    }

    #[test]
    fn typing_formats_as_you_go() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.type_str("1506", &mut app);
        assert_eq!(input.buffer(), "15/06/");

        let _ = input.type_str("2000", &mut app);
        assert_eq!(input.buffer(), "15/06/2000");
    }

    #[test]
    fn non_digits_are_dropped() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.type_str("1a5-06x2000", &mut app);
        assert_eq!(input.buffer(), "15/06/2000");
    }

    #[test]
    fn field_caps_at_a_complete_date() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.type_str("150620001234", &mut app);
        assert_eq!(input.buffer(), "15/06/2000");
    }

    #[test]
    fn backspace_drops_the_last_digit() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.type_str("1506", &mut app);
        let _ = input.handle_key(KeyInput::Backspace, &mut app);

        // "15/06/" minus one digit reformats to "15/0".
        assert_eq!(input.buffer(), "15/0");
    }

    #[test]
    fn enter_with_valid_date_clears_buffer() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.type_str("15062000", &mut app);
        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(app.screen(), Screen::Interstitial);
        assert!(input.buffer().is_empty());
        assert!(actions.iter().any(|a| matches!(a, GateAction::SaveUnlock { .. })));
    }

    #[test]
    fn enter_with_invalid_date_keeps_buffer() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.type_str("9999", &mut app);
        let _ = input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(app.screen(), Screen::Gate);
        assert!(app.input_rejected());
        assert_eq!(input.buffer(), "99/99/");
    }

    #[test]
    fn next_keystroke_clears_the_rejection_cue() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.handle_key(KeyInput::Enter, &mut app);
        assert!(app.input_rejected());

        let _ = input.handle_key(KeyInput::Char('1'), &mut app);
        assert!(!app.input_rejected());
    }

    #[test]
    fn enter_acknowledges_the_interstitial() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let _ = input.type_str("15062000", &mut app);
        let _ = input.handle_key(KeyInput::Enter, &mut app);
        assert_eq!(app.screen(), Screen::Interstitial);

        let _ = input.handle_key(KeyInput::Enter, &mut app);
        assert_eq!(app.screen(), Screen::Content);
    }

    #[test]
    fn typing_is_ignored_while_probe_is_in_flight() {
        let mut input = InputState::new();
        let mut app = App::new(2026);
        let _ = app.start();

        let actions = input.type_str("15", &mut app);
        assert!(actions.is_empty());
        assert!(input.buffer().is_empty());
    }

    #[test]
    fn esc_quits() {
        let mut input = InputState::new();
        let mut app = gated_app();

        let actions = input.handle_key(KeyInput::Esc, &mut app);
        assert!(matches!(actions.as_slice(), [GateAction::Quit]));
    }
}
