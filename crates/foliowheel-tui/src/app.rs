use std::time::{Duration, Instant};

use foliowheel_core::{AppConfig, WheelController};
use ratatui::style::Color;

use crate::color;

/// How long a transient status message stays on screen
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal wheel interaction
    Normal,
    /// Help overlay
    Help,
}

/// One panel on the wheel, with its accent already parsed
pub struct Panel {
    /// Panel title
    pub title: String,
    /// Body text
    pub body: String,
    /// Accent color
    pub rgb: (u8, u8, u8),
}

impl Panel {
    pub fn color(&self) -> Color {
        color::rgb(self.rgb)
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// The rotation controller
    pub wheel: WheelController,
    /// Panels on the wheel, in rotation order
    pub panels: Vec<Panel>,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    status_until: Option<Instant>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let panels: Vec<Panel> = config
            .panels
            .iter()
            .map(|p| Panel {
                title: p.title.clone(),
                body: p.body.clone(),
                rgb: color::accent_rgb(&p.color),
            })
            .collect();
        let wheel = WheelController::new(config.wheel.clone(), panels.len());

        Self {
            config,
            wheel,
            panels,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            status_until: None,
        }
    }

    /// Advance the wheel one frame. A panel change raises a transient
    /// status message; an expired one is cleared.
    pub fn update(&mut self, now: Instant) {
        if let Some(index) = self.wheel.update(now) {
            let message = self
                .panels
                .get(index)
                .map(|panel| format!("{} ({}/{})", panel.title, index + 1, self.panels.len()));
            if let Some(message) = message {
                self.set_status(message, now);
            }
        }

        if let Some(until) = self.status_until {
            if now >= until {
                self.status_message = None;
                self.status_until = None;
            }
        }
    }

    /// Show a status message for a few seconds
    pub fn set_status(&mut self, message: impl Into<String>, now: Instant) {
        self.status_message = Some(message.into());
        self.status_until = Some(now + STATUS_TTL);
    }

    /// Rotate one whole step, +1.0 forward or -1.0 back
    pub fn rotate(&mut self, steps: f64, now: Instant) {
        self.wheel.step(steps, now);
    }

    /// Feed raw scroll-wheel units
    pub fn wheel_input(&mut self, units: f64, now: Instant) {
        self.wheel.wheel(units, now);
    }

    /// The panel the wheel currently rests on
    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.get(self.wheel.active_index())
    }

    /// Cross-faded accent for the current rotation angle
    pub fn accent(&self) -> Color {
        let palette: Vec<(u8, u8, u8)> = self.panels.iter().map(|p| p.rgb).collect();
        color::crossfade(&palette, self.wheel.color_index())
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }

    /// Whether frames should keep coming at the animation cadence
    pub fn is_animating(&self) -> bool {
        self.wheel.is_animating()
    }
}
