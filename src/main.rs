//! Color palette generator TUI
//!
//! A terminal user interface for generating five-color palettes.
//! Run with: paletui

mod app;
mod color;
mod constants;
mod event;
mod palette;
mod ui;

use std::env;

use anyhow::{Context, Result};
use env_logger::Env;

use crate::app::App;
use crate::event::EventHandler;

/// Parses command line arguments.
///
/// Supports:
/// - `-h` or `--help` to show usage
fn parse_args() {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("paletui - color palette generator TUI");
                println!();
                println!("Usage: paletui");
                println!();
                println!("Keys:");
                println!("  Space, r        Regenerate all unlocked colors");
                println!("  h/l, Left/Right Select a swatch");
                println!("  1-5             Jump to a swatch");
                println!("  Enter           Lock / unlock the selected swatch");
                println!("  c               Copy the selected hex code to the clipboard");
                println!("  ?, F1           Help");
                println!("  q, Ctrl+C       Quit");
                println!();
                println!("Diagnostics go to stderr; redirect with 2>paletui.log");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }
}

/// Entry point for the application.
///
/// Sets up diagnostics logging, enters the alternate screen, runs the
/// event loop, and restores the terminal on every exit path.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    parse_args();

    // Clipboard failures and other diagnostics go to stderr
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    // Initialize the terminal
    let terminal = ratatui::init();

    // Create the application
    let app = App::new();

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Expire time-driven state (copy feedback resets)
/// 2. Draw the current UI state
/// 3. Handle user input events
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let event_handler = EventHandler::new();

    // Main loop
    loop {
        // Let scheduled feedback resets fire
        app.tick();

        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Handle events (keyboard input, etc.)
        if let Some(action) = event_handler.next()? {
            // Process the event and check if we should quit
            if app.handle_event(action).await? {
                break;
            }
        }
    }

    Ok(())
}
