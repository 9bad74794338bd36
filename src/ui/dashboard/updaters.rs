//! Dashboard state update logic
//!
//! Key handling and event queue processing

use super::state::{DashboardState, Focus};

use crate::actions::DashboardActions;
use crate::events::{Event, Panel};
use crate::model::AssetKind;
use crossterm::event::KeyCode;
use log::debug;

impl DashboardState {
    /// Move queued events into the activity log.
    ///
    /// Events below the display threshold are dropped here so they cannot
    /// evict visible ones from the bounded log.
    pub fn update(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            if event.should_display() {
                self.add_to_activity_log(event);
            }
        }
    }

    /// Apply one key press. Presses on rows and buttons go to `actions`.
    pub fn handle_key(&mut self, code: KeyCode, actions: &dyn DashboardActions) {
        match code {
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Char('a') => self.assets.add_asset(actions),
            KeyCode::Char('n') => self.goals.add_goal(actions),
            KeyCode::Char('t') => self.select_asset_kind(AssetKind::Traditional),
            KeyCode::Char('c') => self.select_asset_kind(AssetKind::Crypto),
            KeyCode::Char('l') => {
                self.insights.toggle_loading();
                let msg = if self.insights.is_loading() {
                    "Insights loading"
                } else {
                    "Insights loaded"
                };
                self.navigated(Panel::Insights, msg.to_string());
            }
            KeyCode::Left | KeyCode::Right => self.handle_horizontal(code == KeyCode::Right),
            KeyCode::Up => self.handle_vertical(false),
            KeyCode::Down => self.handle_vertical(true),
            KeyCode::Enter => self.handle_press(actions),
            _ => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.navigated(focus.panel(), format!("Focus on {}", focus));
    }

    fn select_asset_kind(&mut self, kind: AssetKind) {
        self.assets.select(kind);
        self.navigated(Panel::Assets, format!("{} assets", kind));
    }

    fn handle_horizontal(&mut self, forward: bool) {
        match self.focus {
            Focus::Assets => {
                self.assets.toggle();
                let kind = self.assets.active_kind();
                self.navigated(Panel::Assets, format!("{} assets", kind));
            }
            Focus::Goals => {
                if forward {
                    self.goals.next_filter();
                } else {
                    self.goals.previous_filter();
                }
                let label = self.goals.filter().label().to_string();
                self.navigated(Panel::Goals, format!("Goal filter: {}", label));
            }
            Focus::Overview | Focus::Insights => {}
        }
    }

    fn handle_vertical(&mut self, down: bool) {
        match (self.focus, down) {
            (Focus::Assets, true) => self.assets.select_next(),
            (Focus::Assets, false) => self.assets.select_previous(),
            (Focus::Goals, true) => self.goals.select_next(),
            (Focus::Goals, false) => self.goals.select_previous(),
            (Focus::Insights, true) => self.insights.select_next(),
            (Focus::Insights, false) => self.insights.select_previous(),
            (Focus::Overview, _) => {}
        }
    }

    fn handle_press(&mut self, actions: &dyn DashboardActions) {
        let handled = match self.focus {
            Focus::Assets => self.assets.press_selected(actions),
            Focus::Goals => self.goals.press_selected(actions),
            Focus::Insights => self.insights.trigger_selected(),
            Focus::Overview => false,
        };
        if !handled {
            debug!("Enter on {} had nothing to press", self.focus);
        }
    }

    fn navigated(&mut self, panel: Panel, msg: String) {
        debug!("{}: {}", panel, msg);
        self.add_event(Event::navigation(panel, msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::MockDashboardActions;
    use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
    use crate::model::DashboardData;
    use crate::ui::app::UIConfig;
    use mockall::predicate::eq;

    fn state() -> DashboardState {
        DashboardState::new(&DashboardData::sample(), &UIConfig::default())
    }

    #[test]
    fn test_tab_moves_focus_and_queues_event() {
        let mut state = state();
        let actions = MockDashboardActions::new();

        state.handle_key(KeyCode::Tab, &actions);
        assert_eq!(state.focus, Focus::Assets);
        assert_eq!(state.pending_events.len(), 1);

        state.update();
        assert!(state.pending_events.is_empty());
        assert!(state.activity_logs.iter().all(|event| event.should_display()));
    }

    #[test]
    // Navigation noise must not push callback events out of the log.
    fn test_hidden_navigation_keeps_actions_in_log() {
        let mut state = state();
        let actions = MockDashboardActions::new();
        state.add_event(Event::action(Panel::Goals, "Opened goal 2".to_string()));
        for _ in 0..MAX_ACTIVITY_LOGS {
            state.handle_key(KeyCode::Tab, &actions);
        }
        state.update();

        assert!(state.pending_events.is_empty());
        assert!(
            state
                .activity_logs
                .iter()
                .any(|event| event.msg == "Opened goal 2")
        );
    }

    #[test]
    fn test_arrows_switch_asset_tab_when_focused() {
        let mut state = state();
        let actions = MockDashboardActions::new();
        state.focus = Focus::Assets;

        state.handle_key(KeyCode::Right, &actions);
        assert_eq!(state.assets.active_kind(), AssetKind::Crypto);
        state.handle_key(KeyCode::Left, &actions);
        assert_eq!(state.assets.active_kind(), AssetKind::Traditional);
    }

    #[test]
    fn test_arrows_cycle_goal_filter_when_focused() {
        let mut state = state();
        let actions = MockDashboardActions::new();
        state.focus = Focus::Goals;

        state.handle_key(KeyCode::Right, &actions);
        assert_eq!(state.goals.filter().label(), "Savings");
        state.handle_key(KeyCode::Left, &actions);
        assert_eq!(state.goals.filter().label(), "All");
    }

    #[test]
    fn test_enter_presses_selected_asset() {
        let mut state = state();
        state.focus = Focus::Assets;
        state.handle_key(KeyCode::Char('c'), &MockDashboardActions::new());
        state.handle_key(KeyCode::Down, &MockDashboardActions::new());
        let expected = state.assets.selected().unwrap().clone();

        let mut actions = MockDashboardActions::new();
        actions
            .expect_on_asset_press()
            .with(eq(expected))
            .times(1)
            .return_const(());
        state.handle_key(KeyCode::Enter, &actions);
    }

    #[test]
    fn test_add_keys_fire_callbacks() {
        let mut state = state();
        let mut actions = MockDashboardActions::new();
        actions
            .expect_on_add_asset()
            .with(eq(AssetKind::Traditional))
            .times(1)
            .return_const(());
        actions.expect_on_add_goal().times(1).return_const(());

        state.handle_key(KeyCode::Char('a'), &actions);
        state.handle_key(KeyCode::Char('n'), &actions);
    }

    #[test]
    fn test_enter_on_goal_reports_id() {
        let mut state = state();
        state.focus = Focus::Goals;

        let mut actions = MockDashboardActions::new();
        actions
            .expect_on_goal_press()
            .with(eq("1".to_string()))
            .times(1)
            .return_const(());
        state.handle_key(KeyCode::Enter, &actions);
    }

    #[test]
    fn test_l_toggles_insights_loading() {
        let mut state = state();
        let actions = MockDashboardActions::new();
        state.handle_key(KeyCode::Char('l'), &actions);
        assert!(state.insights.is_loading());
        state.handle_key(KeyCode::Char('l'), &actions);
        assert!(!state.insights.is_loading());
    }
}
