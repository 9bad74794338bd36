//! Panel view-models
//!
//! Each panel owns its data snapshot plus its own selection state, and
//! recomputes every derived value (totals, filtered lists, progress) on demand.

pub mod asset_tracker;
pub mod goals_tracker;
pub mod insights;
pub mod overview;

pub use asset_tracker::AssetTracker;
pub use goals_tracker::{GoalFilter, GoalsTracker, GoalsView};
pub use insights::{InsightsPanel, InsightsView};
pub use overview::SmartOverview;

/// Next cursor position in a list of `len` rows, wrapping to the top.
pub(crate) fn wrap_next(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (cursor + 1) % len }
}

/// Previous cursor position in a list of `len` rows, wrapping to the bottom.
pub(crate) fn wrap_previous(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if cursor == 0 || cursor >= len {
        len - 1
    } else {
        cursor - 1
    }
}
