pub mod messages;
pub mod setup;
pub mod snapshot_mode;
pub mod tui_mode;

pub use setup::{SessionData, SessionOptions, setup_session};
pub use snapshot_mode::{SnapshotOptions, run_snapshot_mode};
pub use tui_mode::run_tui_mode;
