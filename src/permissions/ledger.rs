use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::permissions::{Permission, PermissionError, PermissionStatus};

/// On-disk record of the user's permission answers.
///
/// Stored as TOML under the platform config dir. A missing file means no
/// question has been answered yet; every status reads as `Unknown`.
#[derive(Debug)]
pub struct ConsentLedger {
    path: PathBuf,
    entries: LedgerFile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    contacts: PermissionStatus,
    #[serde(default)]
    notifications: PermissionStatus,
}

impl ConsentLedger {
    /// Default ledger location: `<config>/mailstart/permissions.toml`.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mailstart").join("permissions.toml")
    }

    /// Loads the ledger, treating a missing file as empty.
    pub fn load(path: &Path) -> Result<Self, PermissionError> {
        let entries = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| PermissionError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| PermissionError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            LedgerFile::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Current status for one permission.
    pub fn status(&self, permission: Permission) -> PermissionStatus {
        match permission {
            Permission::Contacts => self.entries.contacts,
            Permission::Notifications => self.entries.notifications,
        }
    }

    /// Records a grant and persists it. The in-memory entry is only updated
    /// once the file write succeeded, so a failed save cannot leave a
    /// phantom grant behind.
    pub fn grant(&mut self, permission: Permission) -> Result<(), PermissionError> {
        let mut updated = self.entries.clone();
        match permission {
            Permission::Contacts => updated.contacts = PermissionStatus::Granted,
            Permission::Notifications => updated.notifications = PermissionStatus::Granted,
        }

        self.save(&updated)?;
        self.entries = updated;
        Ok(())
    }

    fn save(&self, entries: &LedgerFile) -> Result<(), PermissionError> {
        let write_err = |source| PermissionError::WriteError {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(entries).unwrap_or_default();

        // Write to a sibling temp file first so a crash mid-write can't
        // truncate the ledger.
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }
}
