//! Header rendering with the live palette strip.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::colors;
use super::swatches::swatch_background;

/// Draws the header: a strip of the current palette colors next to an
/// info panel, boxed the same way on every frame.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(55, 65, 81));
    let muted_style = Style::default().fg(Color::Rgb(75, 85, 99));

    // Lock state chip on the top border
    let locked = app.palette.locked_count();
    let chip = if locked > 0 {
        vec![
            Span::styled("┃", border_style),
            Span::styled(" ◈ ", Style::default().fg(colors::WARNING)),
            Span::styled(
                format!("{locked} LOCKED"),
                Style::default().fg(colors::WARNING).bold(),
            ),
            Span::styled(" ┃", border_style),
        ]
    } else {
        vec![
            Span::styled("┃", border_style),
            Span::styled(" ◈ ", Style::default().fg(colors::SUCCESS)),
            Span::styled("UNLOCKED", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" ┃", border_style),
        ]
    };

    // Strip of the live palette, two rows of blocks
    let strip = |caps: &'static str| -> Vec<Span<'static>> {
        app.palette
            .swatches()
            .iter()
            .flat_map(|swatch| {
                [
                    Span::styled(
                        caps.to_string(),
                        Style::default().fg(swatch_background(&swatch.hex)),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect()
    };

    let mut line0 = vec![
        Span::styled("┏", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", dim_style),
    ];
    line0.extend(chip);
    line0.push(Span::styled("▓▒░", dim_style));
    line0.push(Span::styled("╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍", dim_style));

    let mut line1 = vec![Span::styled("┃ ", Style::default().fg(colors::ACCENT))];
    line1.extend(strip("▄▄▄▄"));
    line1.push(Span::styled("┃", Style::default().fg(colors::PRIMARY)));
    line1.push(Span::styled(
        "  ╭───────────────────────────────╮",
        border_style,
    ));

    let mut line2 = vec![Span::styled("┃ ", Style::default().fg(colors::ACCENT))];
    line2.extend(strip("████"));
    line2.push(Span::styled("┃", Style::default().fg(colors::PRIMARY)));
    line2.push(Span::styled("  │ ", border_style));
    line2.push(Span::styled("◆", Style::default().fg(colors::ACCENT)));
    line2.push(Span::styled(
        " PALETTE",
        Style::default().fg(colors::PRIMARY).bold(),
    ));
    line2.push(Span::styled("::", muted_style));
    line2.push(Span::styled(
        "GENERATOR",
        Style::default().fg(colors::KEY).bold(),
    ));
    line2.push(Span::styled(" ▸▸ ", muted_style));
    line2.push(Span::styled("TUI", Style::default().fg(colors::ACCENT).bold()));
    line2.push(Span::styled(" ◆  │", border_style));

    let mut line3 = vec![Span::styled("┃ ", Style::default().fg(colors::ACCENT))];
    line3.extend(strip("▀▀▀▀"));
    line3.push(Span::styled("┃", Style::default().fg(colors::PRIMARY)));
    line3.push(Span::styled("  │ ", border_style));
    line3.push(Span::styled("▪", Style::default().fg(colors::SECONDARY)));
    line3.push(Span::styled(" 5 COLORS ", Style::default().fg(colors::MUTED)));
    line3.push(Span::styled("│", dim_style));
    line3.push(Span::styled(" ▪", Style::default().fg(colors::SUCCESS)));
    line3.push(Span::styled(" RANDOM RGB ", Style::default().fg(colors::MUTED)));
    line3.push(Span::styled("│", dim_style));
    line3.push(Span::styled(" ▪", Style::default().fg(colors::WARNING)));
    line3.push(Span::styled(
        format!(" v{} │", env!("CARGO_PKG_VERSION")),
        border_style,
    ));

    let line4 = vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("                          ", Style::default()),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╰───────────────────────────────╯", border_style),
    ];

    let line5 = vec![
        Span::styled("┗", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╾╢", border_style),
        Span::styled(" ⬢  ", Style::default().fg(colors::SECONDARY)),
        Span::styled("paletui", Style::default().fg(colors::SECONDARY).bold()),
        Span::styled(" ╟╼ ", border_style),
        Span::styled("press space for a new palette", Style::default().fg(colors::MUTED)),
    ];

    let header = Paragraph::new(vec![
        Line::from(line0),
        Line::from(line1),
        Line::from(line2),
        Line::from(line3),
        Line::from(line4),
        Line::from(line5),
    ]);
    frame.render_widget(header, area);
}
