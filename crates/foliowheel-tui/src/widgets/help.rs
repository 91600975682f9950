use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::Chrome;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the help overlay, sized to the configured bindings
    pub fn render(frame: &mut Frame, app: &App) {
        let keymap = &app.config.keymap;
        let rows = [
            (
                format!("{} / {}", keymap.rotate_forward, keymap.rotate_forward_alt),
                "Rotate forward",
            ),
            (
                format!("{} / {}", keymap.rotate_back, keymap.rotate_back_alt),
                "Rotate back",
            ),
            ("Mouse wheel".to_string(), "Turn the wheel"),
            (keymap.help.clone(), "Toggle this help"),
            (format!("{} / <C-c>", keymap.quit), "Quit"),
        ];

        let key_col = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0) + 3;

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, label)| {
                let pad = key_col.saturating_sub(key.width());
                Line::from(vec![
                    Span::styled(
                        format!(" {}{}", key, " ".repeat(pad)),
                        Style::default().fg(Chrome::FG).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*label, Style::default().fg(Chrome::DIM)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "any key closes",
            Style::default().fg(Chrome::FAINT),
        )));

        let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let area = frame.area();
        let popup_width = (content_width + 4).min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.accent()));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
