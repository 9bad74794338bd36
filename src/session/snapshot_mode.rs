//! Snapshot mode execution
//!
//! Draws the dashboard once into an off-screen buffer and prints it, for
//! terminals without raw mode and for scripted checks.

use super::SessionData;
use crate::model::AssetKind;
use crate::panels::GoalFilter;
use crate::ui::UIConfig;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::error::Error;

/// Size and initial panel state of the printed dashboard.
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub width: u16,
    pub height: u16,
    pub asset_kind: AssetKind,
    pub goal_filter: GoalFilter,
    pub insights_loading: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            width: 160,
            height: 60,
            asset_kind: AssetKind::Traditional,
            goal_filter: GoalFilter::All,
            insights_loading: false,
        }
    }
}

/// Renders the dashboard and returns it as text lines, trailing spaces trimmed.
pub fn render_snapshot(
    session: SessionData,
    options: &SnapshotOptions,
) -> Result<Vec<String>, Box<dyn Error>> {
    let ui_config = UIConfig {
        with_background_color: false,
        user_name: session.user_name,
        insights_loading: options.insights_loading,
        asset_kind: options.asset_kind,
        goal_filter: options.goal_filter.clone(),
    };
    let mut state = DashboardState::new(&session.data, &ui_config);
    while let Ok(event) = session.event_receiver.try_recv() {
        state.add_event(event);
    }
    state.update();

    let mut terminal = Terminal::new(TestBackend::new(options.width, options.height))?;
    terminal.draw(|f| render_dashboard(f, &state))?;

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width.max(1));
    let lines = buffer
        .content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();
    Ok(lines)
}

/// Prints the rendered dashboard to stdout.
pub fn run_snapshot_mode(
    session: SessionData,
    options: &SnapshotOptions,
) -> Result<(), Box<dyn Error>> {
    for line in render_snapshot(session, options)? {
        println!("{}", line);
    }
    Ok(())
}
