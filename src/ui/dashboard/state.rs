//! Dashboard state management
//!
//! Contains the main dashboard state struct and the panel focus enum

use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::events::{Event, Panel};
use crate::format::parse_due_date;
use crate::model::DashboardData;
use crate::panels::{AssetTracker, GoalsTracker, InsightsPanel, SmartOverview};
use crate::ui::app::UIConfig;

use log::warn;
use std::collections::VecDeque;

/// The panel that receives navigation keys.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
pub enum Focus {
    #[default]
    Overview,
    Assets,
    Insights,
    Goals,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Overview, Focus::Assets, Focus::Insights, Focus::Goals];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn panel(self) -> Panel {
        match self {
            Focus::Overview => Panel::Overview,
            Focus::Assets => Panel::Assets,
            Focus::Insights => Panel::Insights,
            Focus::Goals => Panel::Goals,
        }
    }
}

/// Records that render with a placeholder, reported once instead of per frame.
fn input_warnings(data: &DashboardData) -> VecDeque<Event> {
    let goal_warnings = data.goals.iter().filter_map(|goal| {
        goal.progress()
            .err()
            .map(|e| Event::warning(Panel::Goals, format!("{}: {}", goal.name, e)))
    });
    let bill_warnings = data
        .bill_alerts
        .iter()
        .filter(|bill| parse_due_date(&bill.due_date).is_none())
        .map(|bill| {
            Event::warning(
                Panel::Overview,
                format!("{}: unrecognised due date {:?}", bill.name, bill.due_date),
            )
        });
    goal_warnings
        .chain(bill_warnings)
        .inspect(|event| warn!("{}", event.msg))
        .collect()
}

/// Everything the dashboard screen renders, plus its selection state.
#[derive(Debug)]
pub struct DashboardState {
    /// Name shown in the welcome header.
    pub user_name: String,
    pub overview: SmartOverview,
    pub assets: AssetTracker,
    pub insights: InsightsPanel,
    pub goals: GoalsTracker,
    /// Panel receiving arrow keys and Enter.
    pub focus: Focus,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(data: &DashboardData, ui_config: &UIConfig) -> Self {
        let mut assets = AssetTracker::from_data(data);
        assets.select(ui_config.asset_kind);
        let mut goals = GoalsTracker::from_data(data);
        goals.set_filter(ui_config.goal_filter.clone());

        let pending_events = input_warnings(data);

        Self {
            user_name: ui_config
                .user_name
                .clone()
                .unwrap_or_else(|| data.user.name.clone()),
            overview: SmartOverview::from_data(data),
            assets,
            insights: InsightsPanel::from_data(data, ui_config.insights_loading),
            goals,
            focus: Focus::default(),
            pending_events,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
