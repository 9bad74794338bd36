//! Savings goals panel
//!
//! Goals filtered by category, each with a clamped progress ratio.

use super::{wrap_next, wrap_previous};
use crate::actions::DashboardActions;
use crate::consts::dashboard_consts::{EMPTY_GOALS_TEXT, GOAL_CATEGORIES, MISSING_VALUE};
use crate::error::DashboardError;
use crate::format::{format_currency, format_ratio_percent};
use crate::model::{DashboardData, Goal};
use log::debug;

/// Progress toward a target as a ratio clamped to [0, 1].
///
/// A target of zero or less, or a non-finite amount, has no meaningful
/// progress and is reported as [`DashboardError::InvalidInput`]. Overshooting
/// the target clamps to 1 and a negative balance clamps to 0.
pub fn progress_ratio(current: f64, target: f64) -> Result<f64, DashboardError> {
    if !current.is_finite() || !target.is_finite() {
        return Err(DashboardError::InvalidInput(format!(
            "non-finite goal amounts ({} of {})",
            current, target
        )));
    }
    if target <= 0.0 {
        return Err(DashboardError::InvalidInput(format!(
            "goal target must be positive, got {}",
            target
        )));
    }
    Ok((current / target).clamp(0.0, 1.0))
}

impl Goal {
    pub fn progress(&self) -> Result<f64, DashboardError> {
        progress_ratio(self.current_amount, self.target_amount)
    }
}

/// The active category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GoalFilter {
    #[default]
    All,
    Category(String),
}

impl GoalFilter {
    /// "all" (any case) means no filtering; anything else is a category name.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            GoalFilter::All
        } else {
            GoalFilter::Category(s.to_string())
        }
    }

    /// Case-insensitive exact match on the goal's category.
    pub fn matches(&self, goal: &Goal) -> bool {
        match self {
            GoalFilter::All => true,
            GoalFilter::Category(category) => goal.category.to_lowercase() == category.to_lowercase(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GoalFilter::All => "All",
            GoalFilter::Category(category) => category,
        }
    }

    pub fn same_as(&self, other: &GoalFilter) -> bool {
        match (self, other) {
            (GoalFilter::All, GoalFilter::All) => true,
            (GoalFilter::Category(a), GoalFilter::Category(b)) => a.to_lowercase() == b.to_lowercase(),
            _ => false,
        }
    }
}

/// One display-ready goal row.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub icon: String,
    pub name: String,
    pub deadline: String,
    /// "$12,500 of $25,000"
    pub amounts: String,
    /// `None` when progress cannot be computed.
    pub ratio: Option<f64>,
    pub percent: String,
}

impl GoalRow {
    fn from_goal(goal: &Goal) -> Self {
        let ratio = match goal.progress() {
            Ok(ratio) => Some(ratio),
            Err(e) => {
                debug!("Goal {} ({}): {}", goal.id, goal.name, e);
                None
            }
        };
        Self {
            icon: goal.icon.clone(),
            name: goal.name.clone(),
            deadline: goal.deadline.clone(),
            amounts: format!(
                "{} of {}",
                format_currency(goal.current_amount),
                format_currency(goal.target_amount)
            ),
            ratio,
            percent: ratio.map_or_else(|| MISSING_VALUE.to_string(), format_ratio_percent),
        }
    }
}

/// What the goal list area shows for the active filter.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalsView {
    Goals(Vec<GoalRow>),
    /// The filter matched nothing.
    Empty { message: &'static str },
}

#[derive(Debug, Clone)]
pub struct GoalsTracker {
    goals: Vec<Goal>,
    filter: GoalFilter,
    cursor: usize,
}

impl GoalsTracker {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self {
            goals,
            filter: GoalFilter::All,
            cursor: 0,
        }
    }

    pub fn from_data(data: &DashboardData) -> Self {
        Self::new(data.goals.clone())
    }

    /// Filter chips in display order, "All" first.
    pub fn filters() -> Vec<GoalFilter> {
        std::iter::once(GoalFilter::All)
            .chain(
                GOAL_CATEGORIES
                    .iter()
                    .map(|category| GoalFilter::Category(category.to_string())),
            )
            .collect()
    }

    pub fn filter(&self) -> &GoalFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: GoalFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    pub fn next_filter(&mut self) {
        let filters = Self::filters();
        let next = match filters.iter().position(|f| f.same_as(&self.filter)) {
            Some(i) => filters[(i + 1) % filters.len()].clone(),
            None => GoalFilter::All,
        };
        self.set_filter(next);
    }

    pub fn previous_filter(&mut self) {
        let filters = Self::filters();
        let previous = match filters.iter().position(|f| f.same_as(&self.filter)) {
            Some(i) => filters[wrap_previous(i, filters.len())].clone(),
            None => GoalFilter::All,
        };
        self.set_filter(previous);
    }

    pub fn filtered_goals(&self) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|goal| self.filter.matches(goal))
            .collect()
    }

    pub fn view(&self) -> GoalsView {
        let rows: Vec<GoalRow> = self
            .filtered_goals()
            .into_iter()
            .map(GoalRow::from_goal)
            .collect();
        if rows.is_empty() {
            GoalsView::Empty {
                message: EMPTY_GOALS_TEXT,
            }
        } else {
            GoalsView::Goals(rows)
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        self.cursor = wrap_next(self.cursor, self.filtered_goals().len());
    }

    pub fn select_previous(&mut self) {
        self.cursor = wrap_previous(self.cursor, self.filtered_goals().len());
    }

    pub fn selected(&self) -> Option<&Goal> {
        self.filtered_goals().get(self.cursor).copied()
    }

    /// Encouragement line derived from the goal closest to completion.
    pub fn encouragement(&self) -> String {
        let progress: Vec<(&Goal, f64)> = self
            .goals
            .iter()
            .filter_map(|goal| goal.progress().ok().map(|ratio| (goal, ratio)))
            .collect();
        if progress.is_empty() {
            return "Add a goal to start tracking your savings.".to_string();
        }
        let closest = progress
            .iter()
            .filter(|(_, ratio)| *ratio < 1.0)
            .max_by(|a, b| a.1.total_cmp(&b.1));
        match closest {
            Some((goal, ratio)) => format!(
                "You're {} of the way to your {} goal!",
                format_ratio_percent(*ratio),
                goal.name
            ),
            None => "Every goal is fully funded!".to_string(),
        }
    }

    pub fn add_goal(&self, actions: &dyn DashboardActions) {
        actions.on_add_goal();
    }

    /// Report a press on the highlighted goal. Returns false when nothing is listed.
    pub fn press_selected(&self, actions: &dyn DashboardActions) -> bool {
        match self.selected() {
            Some(goal) => {
                actions.on_goal_press(goal.id.clone());
                true
            }
            None => false,
        }
    }
}
