//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::actions::ChannelActions;
use crate::consts::dashboard_consts::{INPUT_POLL_MS, SPLASH_DURATION_SECS};
use crate::events::Event as DashboardEvent;
use crate::model::{AssetKind, DashboardData};
use crate::panels::GoalFilter;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use log::debug;
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Overrides the name from the data file.
    pub user_name: Option<String>,
    pub insights_loading: bool,
    /// Asset tab selected when the dashboard opens.
    pub asset_kind: AssetKind,
    /// Goal category selected when the dashboard opens.
    pub goal_filter: GoalFilter,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        user_name: Option<String>,
        insights_loading: bool,
    ) -> Self {
        Self {
            with_background_color,
            user_name,
            insights_loading,
            ..Self::default()
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// When the splash screen was first shown.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Snapshot the dashboard is built from.
    data: DashboardData,

    ui_config: UIConfig,

    /// Receives events raised by panel callbacks.
    event_receiver: Receiver<DashboardEvent>,

    /// Callbacks handed to the panels.
    actions: ChannelActions,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        data: DashboardData,
        ui_config: UIConfig,
        event_receiver: Receiver<DashboardEvent>,
        actions: ChannelActions,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            data,
            ui_config,
            event_receiver,
            actions,
        }
    }

    /// Leaves the splash screen.
    fn open_dashboard(&mut self) {
        debug!("Opening dashboard after {:?}", self.start_time.elapsed());
        let state = DashboardState::new(&self.data, &self.ui_config);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        // Events raised before the dashboard exists stay in the channel
        if let Screen::Dashboard(state) = &mut app.current_screen {
            while let Ok(event) = app.event_receiver.try_recv() {
                state.add_event(event);
            }
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if app.start_time.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                match &mut app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => app.open_dashboard(),
                    Screen::Dashboard(state) => state.handle_key(key.code, &app.actions),
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
pub fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
