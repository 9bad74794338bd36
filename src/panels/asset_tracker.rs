//! Asset tracker panel
//!
//! Two asset lists behind a traditional/crypto tab, with per-list totals.

use super::{wrap_next, wrap_previous};
use crate::actions::DashboardActions;
use crate::format::{Trend, format_change, format_currency};
use crate::model::{Asset, AssetKind, DashboardData};

/// Sum of the `value` field of every asset in the list.
pub fn total_value(assets: &[Asset]) -> f64 {
    assets.iter().map(|asset| asset.value).sum()
}

/// One display-ready asset row.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    /// First two characters of the symbol.
    pub badge: String,
    pub name: String,
    /// Quantity and symbol, e.g. "0.42 BTC".
    pub holding: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

impl AssetRow {
    fn from_asset(asset: &Asset) -> Self {
        Self {
            badge: asset.symbol.chars().take(2).collect(),
            name: asset.name.clone(),
            holding: format!("{} {}", asset.amount, asset.symbol),
            value: format_currency(asset.value),
            change: format_change(asset.change),
            trend: Trend::from_change(asset.change),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetTracker {
    traditional_assets: Vec<Asset>,
    crypto_assets: Vec<Asset>,
    active: AssetKind,
    cursor: usize,
}

impl AssetTracker {
    pub fn new(traditional_assets: Vec<Asset>, crypto_assets: Vec<Asset>) -> Self {
        Self {
            traditional_assets,
            crypto_assets,
            active: AssetKind::Traditional,
            cursor: 0,
        }
    }

    pub fn from_data(data: &DashboardData) -> Self {
        Self::new(data.traditional_assets.clone(), data.crypto_assets.clone())
    }

    pub fn assets(&self, kind: AssetKind) -> &[Asset] {
        match kind {
            AssetKind::Traditional => &self.traditional_assets,
            AssetKind::Crypto => &self.crypto_assets,
        }
    }

    pub fn total(&self, kind: AssetKind) -> f64 {
        total_value(self.assets(kind))
    }

    pub fn active_kind(&self) -> AssetKind {
        self.active
    }

    /// Switch tabs. Selecting the active tab again changes nothing.
    pub fn select(&mut self, kind: AssetKind) {
        if self.active != kind {
            self.active = kind;
            self.cursor = 0;
        }
    }

    pub fn toggle(&mut self) {
        let other = match self.active {
            AssetKind::Traditional => AssetKind::Crypto,
            AssetKind::Crypto => AssetKind::Traditional,
        };
        self.select(other);
    }

    pub fn current_assets(&self) -> &[Asset] {
        self.assets(self.active)
    }

    pub fn current_total(&self) -> f64 {
        self.total(self.active)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        self.cursor = wrap_next(self.cursor, self.current_assets().len());
    }

    pub fn select_previous(&mut self) {
        self.cursor = wrap_previous(self.cursor, self.current_assets().len());
    }

    pub fn selected(&self) -> Option<&Asset> {
        self.current_assets().get(self.cursor)
    }

    pub fn rows(&self) -> Vec<AssetRow> {
        self.current_assets()
            .iter()
            .map(AssetRow::from_asset)
            .collect()
    }

    pub fn total_label(&self) -> String {
        format!("Total {} Value", self.active)
    }

    pub fn add_label(&self) -> &'static str {
        match self.active {
            AssetKind::Traditional => "Add Account",
            AssetKind::Crypto => "Add Crypto",
        }
    }

    /// Request a new asset of the active kind.
    pub fn add_asset(&self, actions: &dyn DashboardActions) {
        actions.on_add_asset(self.active);
    }

    /// Report a press on the highlighted row. Returns false for an empty list.
    pub fn press_selected(&self, actions: &dyn DashboardActions) -> bool {
        match self.selected() {
            Some(asset) => {
                actions.on_asset_press(asset.clone());
                true
            }
            None => false,
        }
    }
}
