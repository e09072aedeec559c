//! Application state and logic.
//!
//! This module contains the core application state, the copy feedback
//! state machine, and event handling logic.

use std::collections::VecDeque;
use std::time::Instant;

use anyhow::Result;

use crate::constants::FEEDBACK_DURATION;
use crate::event::Action;
use crate::palette::{Palette, PALETTE_SIZE};

/// Outcome of the most recent clipboard copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyFeedback {
    /// No copy showing.
    Idle,
    /// The given hex code was copied successfully.
    Copied(String),
    /// The last copy attempt failed.
    Error,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// The five color swatches
    pub palette: Palette,
    /// Index of the selected swatch (always below [`PALETTE_SIZE`])
    pub selected: usize,
    /// Copy feedback shown inside the swatches
    pub feedback: CopyFeedback,
    /// Pending feedback reset deadlines, oldest first.
    ///
    /// Every copy attempt queues its own deadline. Deadlines are never
    /// cancelled: each one forces the feedback back to idle when it
    /// expires, even if a newer copy has changed the state since.
    feedback_resets: VecDeque<Instant>,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Help overlay visibility
    pub show_help: bool,
}

impl App {
    /// Creates a new application instance with the seed palette.
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
            selected: 0,
            feedback: CopyFeedback::Idle,
            feedback_resets: VecDeque::new(),
            status: None,
            show_help: false,
        }
    }

    /// Advances time-driven state. Called once per event loop turn.
    pub fn tick(&mut self) {
        self.expire_feedback_resets(Instant::now());
    }

    /// Handles an action and returns true if the app should quit.
    pub async fn handle_event(&mut self, action: Action) -> Result<bool> {
        // Handle help toggle from any state
        if action == Action::Help {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        // If help is showing, any key closes it and does nothing else
        if self.show_help {
            self.show_help = false;
            return Ok(false);
        }

        match action {
            Action::Quit => return Ok(true),
            Action::Left => self.select_previous(),
            Action::Right => self.select_next(),
            Action::Select(index) => self.select(index),
            Action::Regenerate => self.regenerate(),
            Action::ToggleLock => self.toggle_selected_lock(),
            Action::Copy => self.copy_selected().await?,
            _ => {}
        }
        Ok(false)
    }

    // --- Navigation helpers ---

    fn select_previous(&mut self) {
        self.selected = if self.selected == 0 {
            PALETTE_SIZE - 1
        } else {
            self.selected - 1
        };
    }

    fn select_next(&mut self) {
        self.selected = if self.selected >= PALETTE_SIZE - 1 {
            0
        } else {
            self.selected + 1
        };
    }

    fn select(&mut self, index: usize) {
        if index < PALETTE_SIZE {
            self.selected = index;
        }
    }

    // --- Palette operations ---

    /// Replaces every unlocked swatch with a fresh random color.
    fn regenerate(&mut self) {
        self.palette.regenerate();
        let locked = self.palette.locked_count();
        if locked > 0 {
            self.set_status(&format!("Palette regenerated ({locked} locked)"), false);
        } else {
            self.set_status("Palette regenerated", false);
        }
    }

    /// Locks or unlocks the selected swatch.
    fn toggle_selected_lock(&mut self) {
        self.palette.toggle_lock(self.selected);
        let state = if self.palette.get(self.selected).locked {
            "Locked"
        } else {
            "Unlocked"
        };
        self.set_status(&format!("{} color {}", state, self.selected + 1), false);
    }

    // --- Clipboard copy ---

    /// Copies the selected swatch's hex code to the system clipboard.
    ///
    /// The write runs on a blocking task so the event loop never stalls on
    /// a slow clipboard provider; the outcome is applied when the task
    /// resolves. A swatch whose code is already showing as copied is
    /// skipped until the feedback resets.
    async fn copy_selected(&mut self) -> Result<()> {
        let hex = self.palette.get(self.selected).hex.clone();
        if self.copy_blocked(&hex) {
            return Ok(());
        }

        let text = hex.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text))
        })
        .await;

        match outcome {
            Ok(Ok(())) => self.finish_copy(hex, Ok(())),
            Ok(Err(e)) => self.finish_copy(hex, Err(e.to_string())),
            Err(e) => self.finish_copy(hex, Err(format!("clipboard task panicked: {e}"))),
        }
        Ok(())
    }

    /// True while the given hex is showing as copied; a repeat copy of the
    /// same code is ignored until the feedback resets.
    pub fn copy_blocked(&self, hex: &str) -> bool {
        matches!(&self.feedback, CopyFeedback::Copied(copied) if copied == hex)
    }

    /// Applies the outcome of a clipboard write and schedules the feedback
    /// reset.
    ///
    /// The failure detail goes to the diagnostics log only; the user sees
    /// the generic error indicator.
    fn finish_copy(&mut self, hex: String, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.set_status(
                    &format!("Copied {} to clipboard", hex.to_uppercase()),
                    false,
                );
                self.feedback = CopyFeedback::Copied(hex);
            }
            Err(detail) => {
                log::warn!("clipboard write failed: {detail}");
                self.set_status("Failed to copy to clipboard", true);
                self.feedback = CopyFeedback::Error;
            }
        }
        self.feedback_resets.push_back(Instant::now() + FEEDBACK_DURATION);
    }

    /// Drains every reset deadline that has passed, forcing the feedback
    /// back to idle for each one.
    fn expire_feedback_resets(&mut self, now: Instant) {
        while self
            .feedback_resets
            .front()
            .is_some_and(|deadline| *deadline <= now)
        {
            self.feedback_resets.pop_front();
            self.feedback = CopyFeedback::Idle;
        }
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::palette::SEED_COLORS;

    fn palette_hexes(app: &App) -> Vec<String> {
        app.palette.swatches().iter().map(|s| s.hex.clone()).collect()
    }

    #[test]
    fn test_copy_success_shows_then_resets() {
        let mut app = App::new();

        app.finish_copy("#4A90E2".to_string(), Ok(()));
        assert_eq!(app.feedback, CopyFeedback::Copied("#4A90E2".to_string()));
        assert!(app.copy_blocked("#4A90E2"));
        assert!(!app.copy_blocked("#2ECC71"));

        // Before the deadline the feedback stays up
        app.expire_feedback_resets(Instant::now());
        assert_eq!(app.feedback, CopyFeedback::Copied("#4A90E2".to_string()));

        // Past the deadline it resets to idle
        app.expire_feedback_resets(Instant::now() + FEEDBACK_DURATION);
        assert_eq!(app.feedback, CopyFeedback::Idle);
        assert!(!app.copy_blocked("#4A90E2"));
    }

    #[test]
    fn test_copy_failure_shows_error_then_resets() {
        let mut app = App::new();

        app.finish_copy("#4A90E2".to_string(), Err("denied".to_string()));
        assert_eq!(app.feedback, CopyFeedback::Error);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));

        app.expire_feedback_resets(Instant::now() + FEEDBACK_DURATION);
        assert_eq!(app.feedback, CopyFeedback::Idle);
    }

    #[test]
    fn test_error_does_not_block_retry() {
        let mut app = App::new();
        app.finish_copy("#4A90E2".to_string(), Err("denied".to_string()));
        assert!(!app.copy_blocked("#4A90E2"));
    }

    #[test]
    fn test_earlier_deadline_clears_newer_feedback() {
        let mut app = App::new();
        let t0 = Instant::now();

        // First copy, then a second one half a second later. The first
        // copy's deadline still fires and clears the second copy's
        // feedback early.
        app.feedback = CopyFeedback::Copied("#111111".to_string());
        app.feedback_resets.push_back(t0 + Duration::from_millis(500));
        app.feedback = CopyFeedback::Copied("#222222".to_string());
        app.feedback_resets.push_back(t0 + Duration::from_millis(2500));

        app.expire_feedback_resets(t0 + Duration::from_millis(1000));
        assert_eq!(app.feedback, CopyFeedback::Idle);
        assert_eq!(app.feedback_resets.len(), 1);
    }

    #[tokio::test]
    async fn test_regenerate_action_replaces_unlocked() {
        let mut app = App::new();
        let before = palette_hexes(&app);

        let quit = app.handle_event(Action::Regenerate).await.unwrap();
        assert!(!quit);
        for (hex, old) in palette_hexes(&app).iter().zip(&before) {
            assert_ne!(hex, old);
        }
    }

    #[tokio::test]
    async fn test_help_overlay_swallows_regenerate() {
        let mut app = App::new();
        app.show_help = true;

        app.handle_event(Action::Regenerate).await.unwrap();

        assert!(!app.show_help);
        assert_eq!(palette_hexes(&app), SEED_COLORS.to_vec());
    }

    #[tokio::test]
    async fn test_help_toggle() {
        let mut app = App::new();
        app.handle_event(Action::Help).await.unwrap();
        assert!(app.show_help);
        app.handle_event(Action::Help).await.unwrap();
        assert!(!app.show_help);
    }

    #[tokio::test]
    async fn test_lock_survives_regeneration() {
        let mut app = App::new();
        app.handle_event(Action::Select(2)).await.unwrap();
        app.handle_event(Action::ToggleLock).await.unwrap();
        let locked_hex = app.palette.get(2).hex.clone();

        app.handle_event(Action::Regenerate).await.unwrap();

        assert_eq!(app.palette.get(2).hex, locked_hex);
        assert!(app.palette.get(2).locked);
    }

    #[tokio::test]
    async fn test_selection_wraps_around() {
        let mut app = App::new();
        assert_eq!(app.selected, 0);

        app.handle_event(Action::Left).await.unwrap();
        assert_eq!(app.selected, PALETTE_SIZE - 1);

        app.handle_event(Action::Right).await.unwrap();
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_quit_action() {
        let mut app = App::new();
        assert!(app.handle_event(Action::Quit).await.unwrap());
    }
}
