//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;
use crate::palette::PALETTE_SIZE;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move selection to the previous swatch
    Left,
    /// Move selection to the next swatch
    Right,
    /// Jump directly to a swatch by index
    Select(usize),
    /// Regenerate all unlocked swatches
    Regenerate,
    /// Lock or unlock the selected swatch
    ToggleLock,
    /// Copy the selected swatch's hex code to the clipboard
    Copy,
    /// Show help
    Help,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    /// Returns Ok(Some(action)) if a key event was converted to an action.
    pub fn next(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // Map keys to actions
        match key.code {
            // Navigation
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                debug_assert!(index < PALETTE_SIZE);
                Some(Action::Select(index))
            }

            // Actions
            KeyCode::Char(' ') | KeyCode::Char('r') => Some(Action::Regenerate),
            KeyCode::Enter => Some(Action::ToggleLock),
            KeyCode::Char('c') => Some(Action::Copy),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char('q') => Some(Action::Quit),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_space_regenerates() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char(' '))),
            Some(Action::Regenerate)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('r'))),
            Some(Action::Regenerate)
        );
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('h'))),
            Some(Action::Left)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('l'))),
            Some(Action::Right)
        );
    }

    #[test]
    fn test_arrow_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Left)),
            Some(Action::Left)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Right)),
            Some(Action::Right)
        );
    }

    #[test]
    fn test_digit_keys_select_swatch() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('1'))),
            Some(Action::Select(0))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('5'))),
            Some(Action::Select(4))
        );
        // Digits outside the palette do nothing
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('6'))),
            None
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('0'))),
            None
        );
    }

    #[test]
    fn test_action_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Enter)),
            Some(Action::ToggleLock)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('c'))),
            Some(Action::Copy)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::Esc)), None);
    }
}
