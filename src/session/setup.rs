//! Session setup and initialization

use crate::actions::ChannelActions;
use crate::config::Config;
use crate::error::DashboardError;
use crate::events::{Event, Panel};
use crate::model::DashboardData;
use log::info;
use std::path::PathBuf;
use std::sync::mpsc;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub data_file: Option<PathBuf>,
    pub user_name: Option<String>,
    pub with_background: bool,
}

/// Session data for both TUI and snapshot modes
pub struct SessionData {
    /// Snapshot with insight hooks attached.
    pub data: DashboardData,
    /// Name greeted in the header, if overridden.
    pub user_name: Option<String>,
    pub with_background: bool,
    /// Where the data came from, for start-up messages.
    pub source: String,
    /// Receives events raised by the callbacks.
    pub event_receiver: mpsc::Receiver<Event>,
    pub actions: ChannelActions,
}

/// Resolves the data source and wires the callback channel.
///
/// Flags win over the config file; with no data file anywhere the built-in
/// sample snapshot is used.
pub fn setup_session(config: &Config, options: SessionOptions) -> Result<SessionData, DashboardError> {
    let data_file = options.data_file.or_else(|| config.data_file.clone());
    let (mut data, source) = match data_file {
        Some(path) => {
            let data = DashboardData::load_from_file(&path)?;
            (data, path.display().to_string())
        }
        None => (DashboardData::sample(), "sample data".to_string()),
    };

    let (sender, event_receiver) = mpsc::channel();
    let actions = ChannelActions::new(sender.clone());
    data.insights = actions.attach_insight_hooks(std::mem::take(&mut data.insights));

    info!("Session data from {}", source);
    // Queued until the dashboard opens
    let _ = sender.send(Event::action(Panel::System, format!("Loaded {}", source)));

    Ok(SessionData {
        data,
        user_name: options.user_name.or_else(|| config.user_name.clone()),
        with_background: options.with_background || config.with_background_color,
        source,
        event_receiver,
        actions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_setup_defaults_to_sample_data() {
        let session = setup_session(&Config::default(), SessionOptions::default()).unwrap();
        assert_eq!(session.source, "sample data");
        assert_eq!(session.data.user.name, "Alex");
        assert!(session.data.insights.iter().all(|card| card.on_action.is_some()));

        let event = session.event_receiver.try_recv().unwrap();
        assert_eq!(event.msg, "Loaded sample data");
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut data = DashboardData::sample();
        data.user.name = "Jordan".to_string();
        data.save(&path).unwrap();

        let config = Config::new(Some("Alex".to_string()), None);
        let options = SessionOptions {
            data_file: Some(path),
            user_name: Some("Sam".to_string()),
            with_background: false,
        };
        let session = setup_session(&config, options).unwrap();
        assert_eq!(session.data.user.name, "Jordan");
        assert_eq!(session.user_name.as_deref(), Some("Sam"));
    }

    #[test]
    fn test_missing_data_file_is_an_error() {
        let config = Config::new(None, Some(PathBuf::from("/nonexistent/finboard.json")));
        assert!(matches!(
            setup_session(&config, SessionOptions::default()),
            Err(DashboardError::Io(_))
        ));
    }
}
