//! Permission runtime: which capabilities the client may use, and the
//! consent ledger that records the user's answers.
//!
//! A mobile client would hand these questions to the OS permission dialogs;
//! a terminal client owns its own ledger. The UI layer only sees the
//! [`PermissionRuntime`] trait and never touches the ledger directly.

mod ledger;
mod probe;

pub use ledger::ConsentLedger;
pub use probe::notifications_supported;

use std::path::PathBuf;
use thiserror::Error;

use serde::{Deserialize, Serialize};

/// A capability the client asks for during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Read access to the system address book, for recipient completion.
    Contacts,
    /// Posting desktop notifications when new mail arrives.
    Notifications,
}

impl Permission {
    /// Stable key used in the ledger file.
    pub fn key(&self) -> &'static str {
        match self {
            Permission::Contacts => "contacts",
            Permission::Notifications => "notifications",
        }
    }
}

/// Recorded answer for one permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    /// Never asked, or the answer was discarded.
    #[default]
    Unknown,
    /// The user allowed the capability.
    Granted,
    /// The user refused the capability.
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Errors from the consent ledger.
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("Failed to read consent ledger '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse consent ledger '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write consent ledger '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Seam between the onboarding screen and the platform.
///
/// `status` answers from the ledger; `request` records a grant and
/// persists it. Requesting is synchronous: the user pressing the Allow
/// action *is* the dialog.
pub trait PermissionRuntime: Send {
    /// Current recorded status for a permission.
    fn status(&self, permission: Permission) -> PermissionStatus;

    /// Ask for a permission. Persists the answer before returning it.
    fn request(&mut self, permission: Permission) -> Result<PermissionStatus, PermissionError>;

    /// Whether the platform can deliver desktop notifications at all.
    fn notifications_supported(&self) -> bool;
}

/// Production runtime backed by the on-disk consent ledger.
pub struct ConsentRuntime {
    ledger: ConsentLedger,
    notifications_supported: bool,
}

impl ConsentRuntime {
    pub fn new(ledger: ConsentLedger, notifications_supported: bool) -> Self {
        Self {
            ledger,
            notifications_supported,
        }
    }
}

impl PermissionRuntime for ConsentRuntime {
    fn status(&self, permission: Permission) -> PermissionStatus {
        self.ledger.status(permission)
    }

    fn request(&mut self, permission: Permission) -> Result<PermissionStatus, PermissionError> {
        self.ledger.grant(permission)?;
        tracing::info!(permission = permission.key(), "permission granted");
        Ok(PermissionStatus::Granted)
    }

    fn notifications_supported(&self) -> bool {
        self.notifications_supported
    }
}
