//! User action callbacks
//!
//! Panels never act on a press themselves. They notify an implementation of
//! [`DashboardActions`], which is free to open a form, log, or ignore it.

use crate::events::{Event, Panel};
use crate::model::{Asset, AssetKind, InsightCard};
use log::{debug, info};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Fire-and-forget notifications raised by the panels.
#[cfg_attr(test, mockall::automock)]
pub trait DashboardActions {
    /// "Add Account" / "Add Crypto" was pressed on the asset tracker.
    fn on_add_asset(&self, kind: AssetKind);
    /// An asset row was pressed.
    fn on_asset_press(&self, asset: Asset);
    /// "New Goal" was pressed.
    fn on_add_goal(&self);
    /// A goal row was pressed.
    fn on_goal_press(&self, goal_id: String);
}

/// Forwards every action to the UI loop as an activity [`Event`].
#[derive(Debug, Clone)]
pub struct ChannelActions {
    sender: Sender<Event>,
}

impl ChannelActions {
    pub fn new(sender: Sender<Event>) -> Self {
        Self { sender }
    }

    fn send(&self, event: Event) {
        info!("{}", event);
        // The receiver only goes away when the UI is shutting down.
        if self.sender.send(event).is_err() {
            debug!("Activity receiver closed, dropping event");
        }
    }

    /// Give every card without an action hook one that reports the press.
    pub fn attach_insight_hooks(&self, cards: Vec<InsightCard>) -> Vec<InsightCard> {
        cards
            .into_iter()
            .map(|card| {
                if card.on_action.is_some() {
                    return card;
                }
                let sender = self.clone();
                let msg = format!("{}: {}", card.title, card.action_text);
                card.with_action(Arc::new(move || {
                    sender.send(Event::action(Panel::Insights, msg.clone()))
                }))
            })
            .collect()
    }
}

impl DashboardActions for ChannelActions {
    fn on_add_asset(&self, kind: AssetKind) {
        self.send(Event::action(
            Panel::Assets,
            format!("Add {} asset requested", kind),
        ));
    }

    fn on_asset_press(&self, asset: Asset) {
        self.send(Event::action(
            Panel::Assets,
            format!("Opened {} ({} {})", asset.name, asset.amount, asset.symbol),
        ));
    }

    fn on_add_goal(&self) {
        self.send(Event::action(Panel::Goals, "New goal requested".to_string()));
    }

    fn on_goal_press(&self, goal_id: String) {
        self.send(Event::action(Panel::Goals, format!("Opened goal {}", goal_id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InsightKind;
    use std::sync::mpsc;

    #[test]
    fn test_channel_actions_forward_events() {
        let (sender, receiver) = mpsc::channel();
        let actions = ChannelActions::new(sender);

        actions.on_add_asset(AssetKind::Crypto);
        actions.on_goal_press("2".to_string());

        let first = receiver.try_recv().unwrap();
        assert_eq!(first.panel, Panel::Assets);
        assert_eq!(first.msg, "Add Crypto asset requested");
        let second = receiver.try_recv().unwrap();
        assert_eq!(second.panel, Panel::Goals);
        assert_eq!(second.msg, "Opened goal 2");
    }

    #[test]
    // Cards that already carry a hook keep it.
    fn test_attach_insight_hooks_only_fills_missing() {
        let (sender, receiver) = mpsc::channel();
        let actions = ChannelActions::new(sender);
        let cards = vec![
            InsightCard::new("Tip", "d", InsightKind::Tip, "Learn More"),
            InsightCard::new("Own", "d", InsightKind::Alert, "Pay").with_action(Arc::new(|| {})),
        ];

        let cards = actions.attach_insight_hooks(cards);
        (cards[0].on_action.as_ref().unwrap())();
        (cards[1].on_action.as_ref().unwrap())();

        let event = receiver.try_recv().unwrap();
        assert_eq!(event.msg, "Tip: Learn More");
        assert!(receiver.try_recv().is_err());
    }
}
