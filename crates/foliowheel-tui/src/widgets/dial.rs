use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Chrome;

pub struct DialWidget;

impl DialWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let accent = app.accent();

        let block = Block::default()
            .title(" Wheel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{:>8.1}°", app.wheel.rotation()),
                Style::default().fg(Chrome::FG).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{:>8.1}°/s", app.wheel.velocity()),
                Style::default().fg(Chrome::FAINT),
            )),
            Line::from(""),
            Self::tape_line(app, inner.width),
            Line::from(""),
            Self::dots_line(app),
            Line::from(Span::styled(
                format!("{} / {}", app.wheel.active_index() + 1, app.panels.len().max(1)),
                Style::default().fg(Chrome::DIM),
            )),
        ];

        // Center the dial vertically inside the block
        let pad = inner.height.saturating_sub(lines.len() as u16) / 2;
        for _ in 0..pad {
            lines.insert(0, Line::from(""));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }

    /// One revolution laid out as a horizontal tape with a marker at the
    /// current angle
    fn tape_line(app: &App, width: u16) -> Line<'static> {
        let tape_width = width.saturating_sub(4) as usize;
        if tape_width < 3 {
            return Line::from("");
        }

        let normalized = app.wheel.rotation().rem_euclid(360.0) / 360.0;
        let marker = (normalized * (tape_width - 1) as f64).round() as usize;

        Line::from(vec![
            Span::styled("─".repeat(marker), Style::default().fg(Chrome::BORDER)),
            Span::styled("◆", Style::default().fg(app.accent())),
            Span::styled(
                "─".repeat(tape_width - marker - 1),
                Style::default().fg(Chrome::BORDER),
            ),
        ])
    }

    /// One dot per panel, the active one filled
    fn dots_line(app: &App) -> Line<'static> {
        let active = app.wheel.active_index();
        let mut spans = Vec::with_capacity(app.panels.len() * 2);

        for (i, panel) in app.panels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let (symbol, style) = if i == active {
                (
                    "●",
                    Style::default()
                        .fg(panel.color())
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("○", Style::default().fg(Chrome::FAINT))
            };
            spans.push(Span::styled(symbol, style));
        }

        Line::from(spans)
    }
}
