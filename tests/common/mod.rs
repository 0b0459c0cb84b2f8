//! Test doubles for the permissions screen.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use mailstart::permissions::{Permission, PermissionError, PermissionRuntime, PermissionStatus};
use mailstart::strings::Strings;
use mailstart::ui::app::App;
use mailstart::ui::permissions::PermissionsIntent;

/// In-memory permission runtime that records every request.
pub struct MemoryRuntime {
    pub contacts: PermissionStatus,
    pub notifications: PermissionStatus,
    pub notifications_supported: bool,
    requests: Arc<Mutex<Vec<Permission>>>,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self {
            contacts: PermissionStatus::Unknown,
            notifications: PermissionStatus::Unknown,
            notifications_supported: true,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle for asserting on requests after the runtime is boxed away.
    pub fn requests(&self) -> Arc<Mutex<Vec<Permission>>> {
        Arc::clone(&self.requests)
    }
}

impl PermissionRuntime for MemoryRuntime {
    fn status(&self, permission: Permission) -> PermissionStatus {
        match permission {
            Permission::Contacts => self.contacts,
            Permission::Notifications => self.notifications,
        }
    }

    fn request(&mut self, permission: Permission) -> Result<PermissionStatus, PermissionError> {
        self.requests.lock().push(permission);
        match permission {
            Permission::Contacts => self.contacts = PermissionStatus::Granted,
            Permission::Notifications => self.notifications = PermissionStatus::Granted,
        }
        Ok(PermissionStatus::Granted)
    }

    fn notifications_supported(&self) -> bool {
        self.notifications_supported
    }
}

pub const TICK: Duration = Duration::from_millis(50);

/// App in its initial (loading) state, width-capped at 80 columns.
pub fn loading_app(runtime: MemoryRuntime) -> App {
    App::new(
        Strings::default(),
        Arc::new(Mutex::new(Box::new(runtime))),
        TICK,
        80,
    )
}

/// App after the loader delivered the given statuses.
pub fn loaded_app(
    contacts: PermissionStatus,
    notifications: PermissionStatus,
    notifications_visible: bool,
) -> App {
    let mut app = loading_app(MemoryRuntime::new());
    app.dispatch(PermissionsIntent::StatusLoaded {
        contacts,
        notifications,
        notifications_visible,
    });
    app
}

/// Flatten a test terminal's buffer into one string, row by row.
pub fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}
