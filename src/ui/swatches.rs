//! Swatch row rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, CopyFeedback};
use crate::color::{contrast_text_color, parse_hex, TEXT_DARK};
use crate::palette::{Swatch, PALETTE_SIZE};

use super::colors;

/// Draws the row of five swatches side by side.
pub fn draw_swatch_row(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
        .split(area);

    for (idx, swatch) in app.palette.swatches().iter().enumerate() {
        draw_swatch(frame, columns[idx], app, idx, swatch);
    }
}

/// Draws a single swatch cell: background in the swatch's own color, hex
/// code and labels in the contrasting text color.
fn draw_swatch(frame: &mut Frame, area: Rect, app: &App, idx: usize, swatch: &Swatch) {
    let is_selected = app.selected == idx;
    let bg = swatch_background(&swatch.hex);
    let fg = swatch_text_color(&swatch.hex);

    let border_style = if is_selected {
        Style::default().fg(colors::SELECTION).bold()
    } else {
        Style::default().fg(colors::BORDER)
    };

    let mut title_spans = vec![Span::styled(
        format!(" Color {} ", idx + 1),
        border_style,
    )];
    if swatch.locked {
        // Lock marker, mirrored in the swatch body below
        title_spans.push(Span::styled("● ", Style::default().fg(colors::WARNING)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .border_set(if is_selected {
            symbols::border::THICK
        } else {
            symbols::border::ROUNDED
        })
        .title(Line::from(title_spans))
        .style(Style::default().bg(bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_style = Style::default().fg(fg);
    let mut content: Vec<Line> = Vec::new();

    // Center the content vertically in whatever height the terminal gives us
    let body_height = 4u16;
    for _ in 0..inner.height.saturating_sub(body_height) / 2 {
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        swatch.hex.to_uppercase(),
        text_style.bold(),
    )));
    content.push(feedback_line(app, swatch, text_style));
    content.push(Line::from(Span::styled(
        if swatch.locked { "locked" } else { "" },
        text_style.italic(),
    )));
    content.push(Line::from(Span::styled(
        format!("Color {}", idx + 1),
        text_style.dim(),
    )));

    let body = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(body, inner);
}

/// The transient feedback line under the hex code.
///
/// A successful copy shows on every swatch carrying the copied code; the
/// error state records no code and shows on all of them.
fn feedback_line(app: &App, swatch: &Swatch, text_style: Style) -> Line<'static> {
    match &app.feedback {
        CopyFeedback::Copied(hex) if *hex == swatch.hex => {
            Line::from(Span::styled("✓ Copied!", text_style.bold()))
        }
        CopyFeedback::Error => Line::from(Span::styled("⚠ Copy failed", text_style.bold())),
        _ => Line::from(""),
    }
}

/// Background color of a swatch cell.
pub(super) fn swatch_background(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

/// Text color that stays readable on the swatch background.
fn swatch_text_color(hex: &str) -> Color {
    if contrast_text_color(hex) == TEXT_DARK {
        Color::Rgb(0, 0, 0)
    } else {
        Color::Rgb(255, 255, 255)
    }
}
