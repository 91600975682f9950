use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use foliowheel_core::AppConfig;
use foliowheel_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    widgets::{DialWidget, HelpWidget, PanelWidget, StatusBarWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    config.wheel.validate()?;

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Create event handler with both poll cadences
    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Create app state and start the wheel
    let mut app = App::new(config);
    app.wheel.start(Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("foliowheel")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal even when the loop errored
    app.wheel.stop();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    // Checked at the END of each iteration to choose the NEXT
    // iteration's poll cadence
    let mut needs_fast_update = false;

    loop {
        app.update(Instant::now());

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
                .split(chunks[0]);

            DialWidget::render(frame, columns[0], app);
            PanelWidget::render(frame, columns[1], app);
            StatusBarWidget::render(frame, chunks[1], app);

            if app.mode == Mode::Help {
                HelpWidget::render(frame, app);
            }
        })?;

        let event = if needs_fast_update {
            event_handler.next_frame()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    apply_action(app, action);
                }
                AppEvent::Wheel(units) => app.wheel_input(units, Instant::now()),
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.is_animating();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::RotateForward => app.rotate(1.0, Instant::now()),
        Action::RotateBack => app.rotate(-1.0, Instant::now()),
        Action::ToggleHelp => app.toggle_help(),
        Action::None => {}
    }
}
