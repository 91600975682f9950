use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::theme::Chrome;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            let title = app
                .active_panel()
                .map(|p| p.title.as_str())
                .unwrap_or("(no panels)");
            format!(
                " {} | {} | {:.1}° | Panel {}/{}",
                mode_str,
                title,
                app.wheel.rotation(),
                app.wheel.active_index() + 1,
                app.panels.len().max(1),
            )
        };

        let help_hint = " q:quit ↑/↓:rotate ?:help ";
        let padding = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Chrome::FG).bg(Chrome::STATUS_BG),
            ),
            Span::styled(" ".repeat(padding), Style::default().bg(Chrome::STATUS_BG)),
            Span::styled(
                help_hint,
                Style::default().fg(Chrome::DIM).bg(Chrome::STATUS_BG),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
