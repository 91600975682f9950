use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};

/// Raw input units one scroll-wheel notch feeds into the controller,
/// before the configured divisor is applied.
pub const WHEEL_NOTCH: f64 = 120.0;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_fps: u64) -> Self {
        let animation_rate = if animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / animation_fps)
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_rate,
        }
    }

    /// Poll for the next event at the idle cadence
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation cadence. Used while the
    /// wheel is in motion so frames keep coming.
    pub fn next_frame(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Some terminals also deliver repeat/release kinds
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => Ok(Some(AppEvent::Wheel(WHEEL_NOTCH))),
                    MouseEventKind::ScrollUp => Ok(Some(AppEvent::Wheel(-WHEEL_NOTCH))),
                    _ => Ok(None),
                },
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// The scroll wheel moved, in raw input units
    Wheel(f64),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
