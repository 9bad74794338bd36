//! Event System
//!
//! Activity events raised by user actions and shown in the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The dashboard panel an event originated from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Panel {
    Overview,
    Assets,
    Insights,
    Goals,
    /// The application itself (startup, data loading).
    System,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A callback fired from a button or row press.
    Action,
    /// Focus, tab or filter changed.
    Navigation,
    /// Something could not be displayed as supplied.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub panel: Panel,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(panel: Panel, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            panel,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn action(panel: Panel, msg: String) -> Self {
        Self::new(panel, msg, EventType::Action, LogLevel::Info)
    }

    pub fn navigation(panel: Panel, msg: String) -> Self {
        Self::new(panel, msg, EventType::Navigation, LogLevel::Debug)
    }

    pub fn warning(panel: Panel, msg: String) -> Self {
        Self::new(panel, msg, EventType::Warning, LogLevel::Warn)
    }

    pub fn should_display(&self) -> bool {
        // Always show actions and anything at info or above
        if self.event_type == EventType::Action || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.panel, self.msg
        )
    }
}
