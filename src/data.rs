//! Dashboard snapshot files.

use crate::error::DashboardError;
use crate::model::DashboardData;
use log::info;
use std::fs;
use std::path::Path;

impl DashboardData {
    /// Loads a snapshot from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        let data: DashboardData = serde_json::from_slice(&buf)?;
        info!(
            "Loaded snapshot from {} ({} goals, {} insights)",
            path.display(),
            data.goals.len(),
            data.insights.len()
        );
        Ok(data)
    }

    /// Writes the snapshot as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot.json");

        DashboardData::sample().save(&path).unwrap();
        let loaded = DashboardData::load_from_file(&path).unwrap();
        assert_eq!(loaded.user.name, "Alex");
        assert_eq!(loaded.crypto_assets.len(), 3);
    }

    #[test]
    // Lists may be omitted from a snapshot file.
    fn test_load_minimal_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{"user":{"name":"Sam"},"totalBalance":10,"monthlySpending":2}"#,
        )
        .unwrap();

        let loaded = DashboardData::load_from_file(&path).unwrap();
        assert!(loaded.goals.is_empty());
        assert!(loaded.insights.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, r#"{"user":{}}"#).unwrap();

        assert!(matches!(
            DashboardData::load_from_file(&path),
            Err(DashboardError::Json(_))
        ));
        assert!(matches!(
            DashboardData::load_from_file(&dir.path().join("missing.json")),
            Err(DashboardError::Io(_))
        ));
    }
}
