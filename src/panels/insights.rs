//! Insights panel
//!
//! Static advisory cards, or a single loading placeholder while the caller
//! reports that insights are still loading.

use super::{wrap_next, wrap_previous};
use crate::model::{DashboardData, InsightCard, InsightKind};
use log::debug;
use ratatui::prelude::Color;

/// Glyph and colours for one insight category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InsightStyle {
    pub icon: &'static str,
    pub color: Color,
    pub border: Color,
}

impl InsightKind {
    /// Styling for every category; anything unrecognised was already read as `Tip`.
    pub fn style(&self) -> InsightStyle {
        match self {
            InsightKind::Saving => InsightStyle {
                icon: "$",
                color: Color::Rgb(16, 185, 129),
                border: Color::Rgb(167, 243, 208),
            },
            InsightKind::Spending => InsightStyle {
                icon: "▼",
                color: Color::Rgb(239, 68, 68),
                border: Color::Rgb(254, 202, 202),
            },
            InsightKind::Alert => InsightStyle {
                icon: "!",
                color: Color::Rgb(245, 158, 11),
                border: Color::Rgb(253, 230, 138),
            },
            InsightKind::Tip => InsightStyle {
                icon: "*",
                color: Color::Rgb(59, 130, 246),
                border: Color::Rgb(191, 219, 254),
            },
        }
    }
}

/// What the panel body shows.
#[derive(Debug)]
pub enum InsightsView<'a> {
    /// Only the loading placeholder; no cards.
    Loading,
    Cards(&'a [InsightCard]),
}

#[derive(Debug, Clone)]
pub struct InsightsPanel {
    cards: Vec<InsightCard>,
    is_loading: bool,
    cursor: usize,
}

impl InsightsPanel {
    pub fn new(cards: Vec<InsightCard>, is_loading: bool) -> Self {
        Self {
            cards,
            is_loading,
            cursor: 0,
        }
    }

    pub fn from_data(data: &DashboardData, is_loading: bool) -> Self {
        Self::new(data.insights.clone(), is_loading)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn toggle_loading(&mut self) {
        self.is_loading = !self.is_loading;
    }

    pub fn view(&self) -> InsightsView<'_> {
        if self.is_loading {
            InsightsView::Loading
        } else {
            InsightsView::Cards(&self.cards)
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        self.cursor = wrap_next(self.cursor, self.cards.len());
    }

    pub fn select_previous(&mut self) {
        self.cursor = wrap_previous(self.cursor, self.cards.len());
    }

    /// Run the action hook of the card at `index`.
    ///
    /// Returns whether a hook ran. A card without a hook, an index past the
    /// end, or a panel that is still loading are all no-ops.
    pub fn trigger(&self, index: usize) -> bool {
        if self.is_loading {
            return false;
        }
        match self.cards.get(index).and_then(|card| card.on_action.as_ref()) {
            Some(hook) => {
                hook();
                true
            }
            None => {
                debug!("No action hook for insight {}", index);
                false
            }
        }
    }

    pub fn trigger_selected(&self) -> bool {
        self.trigger(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    // Loading shows the placeholder and no cards at all.
    fn test_loading_shows_only_placeholder() {
        let panel = InsightsPanel::from_data(&DashboardData::sample(), true);
        assert!(matches!(panel.view(), InsightsView::Loading));
    }

    #[test]
    fn test_cards_shown_when_loaded() {
        let mut panel = InsightsPanel::from_data(&DashboardData::sample(), true);
        panel.toggle_loading();
        match panel.view() {
            InsightsView::Cards(cards) => assert_eq!(cards.len(), 4),
            InsightsView::Loading => panic!("still loading"),
        }
    }

    #[test]
    // Every category, including unrecognised ones, gets a style.
    fn test_style_mapping_is_total() {
        assert_eq!(InsightKind::Saving.style().icon, "$");
        assert_eq!(InsightKind::Spending.style().icon, "▼");
        assert_eq!(InsightKind::Alert.style().icon, "!");
        assert_eq!(InsightKind::from("mystery").style(), InsightKind::Tip.style());
        assert_eq!(InsightKind::from("").style(), InsightKind::Tip.style());
    }

    #[test]
    fn test_trigger_runs_card_hook() {
        let count = Arc::new(AtomicUsize::new(0));
        let hook_count = count.clone();
        let card = InsightCard::new("Bill", "Due soon", InsightKind::Alert, "Pay").with_action(
            Arc::new(move || {
                hook_count.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let panel = InsightsPanel::new(vec![card], false);

        assert!(panel.trigger_selected());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    // A card without a hook is a valid no-op.
    fn test_trigger_without_hook_is_noop() {
        let panel = InsightsPanel::from_data(&DashboardData::sample(), false);
        assert!(!panel.trigger(0));
        assert!(!panel.trigger(99));
    }

    #[test]
    fn test_trigger_while_loading_is_noop() {
        let count = Arc::new(AtomicUsize::new(0));
        let hook_count = count.clone();
        let card = InsightCard::new("Tip", "d", InsightKind::Tip, "Go").with_action(Arc::new(
            move || {
                hook_count.fetch_add(1, Ordering::SeqCst);
            },
        ));
        let panel = InsightsPanel::new(vec![card], true);

        assert!(!panel.trigger(0));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
