use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Chrome;

/// Bob displacement units that move the content by one terminal row.
/// The default amplitude of 100 sways the panel about two rows.
const BOB_UNITS_PER_ROW: f64 = 40.0;

pub struct PanelWidget;

impl PanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(panel) = app.active_panel() else {
            Self::render_empty(frame, area);
            return;
        };

        let block = Block::default()
            .title(format!(" {} ", panel.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.accent()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                panel.title.clone(),
                Style::default()
                    .fg(panel.color())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if !panel.body.is_empty() {
            lines.push(Line::from(Span::styled(
                panel.body.clone(),
                Style::default().fg(Chrome::FG),
            )));
        }

        // Vertical offset: a third of the way down, swayed by the bob.
        // Negative bob lifts the content.
        let bob_rows = (app.wheel.bob_offset() / BOB_UNITS_PER_ROW).round() as i32;
        let base = (inner.height / 3) as i32;
        let pad = (base + bob_rows).clamp(0, inner.height.saturating_sub(1) as i32) as u16;

        let content = Rect {
            x: inner.x,
            y: inner.y + pad,
            width: inner.width,
            height: inner.height - pad,
        };

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, content);
    }

    fn render_empty(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" foliowheel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Chrome::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No panels configured",
            Style::default().fg(Chrome::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}
