use crate::permissions::PermissionStatus;
use crate::ui::mvi::UiState;

/// Snapshot the permissions screen renders from.
///
/// Starts in the loading state; the loader thread delivers the recorded
/// statuses and the platform's notification capability, after which the
/// cards and the bottom-bar action follow from the fields below.
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionsState {
    /// True while the consent ledger is still being read.
    pub is_loading: bool,
    /// Recorded status of the contacts permission.
    pub contacts: PermissionStatus,
    /// Recorded status of the notifications permission.
    pub notifications: PermissionStatus,
    /// Whether the platform exposes a notifications permission at all.
    /// When false the notifications card is omitted entirely.
    pub notifications_visible: bool,
    /// Whether every offered permission is granted, switching the bar
    /// action from Skip to Next.
    pub next_visible: bool,
}

impl Default for PermissionsState {
    fn default() -> Self {
        Self {
            is_loading: true,
            contacts: PermissionStatus::Unknown,
            notifications: PermissionStatus::Unknown,
            notifications_visible: true,
            next_visible: false,
        }
    }
}

impl UiState for PermissionsState {}

impl PermissionsState {
    /// All offered permissions granted?
    pub fn all_granted(&self) -> bool {
        self.contacts.is_granted() && (self.notifications.is_granted() || !self.notifications_visible)
    }
}
