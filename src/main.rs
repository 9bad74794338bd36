mod actions;
mod cli_messages;
mod config;
mod consts;
mod data;
mod error;
mod events;
mod format;
mod logging;
mod model;
mod panels;
mod sample;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::model::{AssetKind, DashboardData};
use crate::panels::GoalFilter;
use crate::session::{SessionOptions, SnapshotOptions, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// JSON snapshot to display instead of the built-in sample data
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Name to greet in the header
        #[arg(long, value_name = "NAME")]
        user: Option<String>,

        /// Show the insights panel in its loading state
        #[arg(long, action = clap::ArgAction::SetTrue)]
        insights_loading: bool,

        /// Paint a dark background behind the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Print the dashboard once, without entering raw mode
    Snapshot {
        /// JSON snapshot to display instead of the built-in sample data
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Width of the rendered dashboard in columns
        #[arg(long, default_value_t = 160)]
        width: u16,

        /// Height of the rendered dashboard in rows
        #[arg(long, default_value_t = 60)]
        height: u16,

        /// Asset tab to show: traditional or crypto
        #[arg(long, value_name = "KIND", default_value = "traditional")]
        asset_tab: AssetKind,

        /// Goal category to filter by, or "all"
        #[arg(long, value_name = "CATEGORY", default_value = "all")]
        goal_filter: String,

        /// Show the insights panel in its loading state
        #[arg(long, action = clap::ArgAction::SetTrue)]
        insights_loading: bool,
    },
    /// Write the sample snapshot as JSON, as a starting point for your own data
    ExportSample {
        /// Destination file
        path: PathBuf,
    },
    /// Write the configuration file
    InitConfig {
        /// Name to greet in the header
        #[arg(long, value_name = "NAME")]
        user: Option<String>,

        /// JSON snapshot to load by default
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            data,
            user,
            insights_loading,
            with_background,
        } => {
            let config = load_config(&config_path);
            let options = SessionOptions {
                data_file: data,
                user_name: user,
                with_background,
            };
            let session = setup_session(&config, options)
                .map_err(|e| format!("Failed to load dashboard data: {}", e))?;
            session::run_tui_mode(session, insights_loading)
        }
        Command::Snapshot {
            data,
            width,
            height,
            asset_tab,
            goal_filter,
            insights_loading,
        } => {
            let config = load_config(&config_path);
            let options = SessionOptions {
                data_file: data,
                ..SessionOptions::default()
            };
            let session = setup_session(&config, options)
                .map_err(|e| format!("Failed to load dashboard data: {}", e))?;
            let snapshot = SnapshotOptions {
                width,
                height,
                asset_kind: asset_tab,
                goal_filter: GoalFilter::parse(&goal_filter),
                insights_loading,
            };
            session::run_snapshot_mode(session, &snapshot)
        }
        Command::ExportSample { path } => {
            DashboardData::sample().save(&path)?;
            print_cmd_success!("Sample data written", "{}", path.display());
            Ok(())
        }
        Command::InitConfig { user, data } => {
            let config = Config::new(user, data);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Config written", "{}", config_path.display());
            print_cmd_info!("Next step", "run `finboard start` to open the dashboard");
            Ok(())
        }
    }
}

/// Reads the config file, falling back to defaults when it is unreadable.
fn load_config(path: &Path) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            print_cmd_warn!("Ignoring config file", "{}: {}", path.display(), e);
            Config::default()
        }
    }
}
