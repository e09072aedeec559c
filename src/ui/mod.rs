//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each section of the screen is rendered by a separate submodule.

mod colors;
mod header;
mod help;
mod status;
mod swatches;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use header::draw_header;
use help::draw_help_overlay;
use status::{draw_commands_bar, draw_status_bar};
use swatches::draw_swatch_row;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, swatch row, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Swatch row
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_swatch_row(frame, chunks[1], app);
    draw_commands_bar(frame, chunks[2]);
    draw_status_bar(frame, chunks[3], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}
