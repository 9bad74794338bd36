//! Dashboard data model.
//!
//! Plain value records supplied by the caller for one render pass. Field names
//! serialize in camelCase so snapshot files use the same keys as the mobile
//! app's mock data.

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// A holding: a cash account or a crypto position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Quantity held, in units of `symbol`.
    pub amount: f64,
    /// Current value in dollars. Supplied directly, never derived from `amount`.
    pub value: f64,
    /// Period-over-period change, in percent.
    pub change: f64,
    /// Image reference for the asset logo. Not rendered in the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Which asset list the tracker shows.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[default]
    Traditional,
    Crypto,
}

impl FromStr for AssetKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "traditional" => Ok(AssetKind::Traditional),
            "crypto" => Ok(AssetKind::Crypto),
            _ => Err(DashboardError::UnknownAssetKind(s.to_string())),
        }
    }
}

/// A savings target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    /// Display string such as "Dec 2024"; never parsed.
    pub deadline: String,
    pub category: String,
    /// Display glyph.
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingCategory {
    pub category: String,
    pub amount: f64,
    /// Share of monthly spending as supplied; not checked to sum to 100.
    pub percentage: f64,
    /// Hex colour such as "#4C51BF".
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsOpportunity {
    pub title: String,
    pub description: String,
    pub potential_savings: f64,
}

/// An upcoming payment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillAlert {
    pub name: String,
    pub amount: f64,
    /// ISO date, e.g. "2023-06-01".
    pub due_date: String,
    pub is_priority: bool,
}

/// Category of an insight card. Unrecognised type strings read as `Tip`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum InsightKind {
    Saving,
    Spending,
    Alert,
    #[default]
    Tip,
}

impl From<&str> for InsightKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "saving" => InsightKind::Saving,
            "spending" => InsightKind::Spending,
            "alert" => InsightKind::Alert,
            _ => InsightKind::Tip,
        }
    }
}

impl From<String> for InsightKind {
    fn from(s: String) -> Self {
        InsightKind::from(s.as_str())
    }
}

/// Callback attached to an insight card's action button.
pub type ActionHook = Arc<dyn Fn() + Send + Sync>;

/// A static advisory message.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InsightCard {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: InsightKind,
    #[serde(default = "default_action_text")]
    pub action_text: String,
    /// Invoked when the card's action is pressed. `None` makes the action a no-op.
    #[serde(skip)]
    pub on_action: Option<ActionHook>,
}

fn default_action_text() -> String {
    "Take Action".to_string()
}

impl InsightCard {
    pub fn new(title: &str, description: &str, kind: InsightKind, action_text: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind,
            action_text: action_text.to_string(),
            on_action: None,
        }
    }

    /// Attach an action hook, replacing any existing one.
    pub fn with_action(mut self, hook: ActionHook) -> Self {
        self.on_action = Some(hook);
        self
    }
}

impl Debug for InsightCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightCard")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .field("action_text", &self.action_text)
            .field("on_action", &self.on_action.is_some())
            .finish()
    }
}

/// The person the dashboard greets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
}

/// One complete snapshot of everything the dashboard shows.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub user: UserProfile,
    pub total_balance: f64,
    pub monthly_spending: f64,
    #[serde(default)]
    pub spending_categories: Vec<SpendingCategory>,
    #[serde(default)]
    pub savings_opportunities: Vec<SavingsOpportunity>,
    #[serde(default)]
    pub bill_alerts: Vec<BillAlert>,
    #[serde(default)]
    pub traditional_assets: Vec<Asset>,
    #[serde(default)]
    pub crypto_assets: Vec<Asset>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub insights: Vec<InsightCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_from_str() {
        assert_eq!("crypto".parse::<AssetKind>().unwrap(), AssetKind::Crypto);
        assert_eq!(
            "Traditional".parse::<AssetKind>().unwrap(),
            AssetKind::Traditional
        );
        assert!(matches!(
            "stocks".parse::<AssetKind>(),
            Err(DashboardError::UnknownAssetKind(_))
        ));
    }

    #[test]
    // Unknown insight types fall back to the tip category.
    fn test_insight_kind_unknown_reads_as_tip() {
        let json = r#"{"title":"T","description":"D","type":"forecast","actionText":"Go"}"#;
        let card: InsightCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind, InsightKind::Tip);
        assert!(card.on_action.is_none());

        let json = r#"{"title":"T","description":"D","type":"alert"}"#;
        let card: InsightCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind, InsightKind::Alert);
        assert_eq!(card.action_text, "Take Action");
    }

    #[test]
    fn test_goal_reads_camel_case() {
        let json = r#"{
            "id": "1", "name": "New Car", "targetAmount": 25000,
            "currentAmount": 12500, "deadline": "Dec 2024",
            "category": "Transportation", "icon": "🚗"
        }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.target_amount, 25000.0);
        assert_eq!(goal.current_amount, 12500.0);
    }

    #[test]
    fn test_insight_kind_display() {
        assert_eq!(InsightKind::Saving.to_string(), "saving");
        assert_eq!(AssetKind::Crypto.to_string(), "Crypto");
    }
}
