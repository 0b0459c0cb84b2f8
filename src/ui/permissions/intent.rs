use crate::permissions::{Permission, PermissionStatus};
use crate::ui::mvi::Intent;

/// Intents for the permissions screen.
///
/// The first three are user actions dispatched by the screen's controls.
/// Skip and Next both dispatch `NextClicked`; skipping is modeled
/// identically to proceeding, so this layer cannot tell them apart.
/// The rest are results delivered by the permission runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionsIntent {
    /// Allow action on the contacts card.
    AllowContactsPermissionClicked,
    /// Allow action on the notifications card.
    AllowNotificationsPermissionClicked,
    /// Bottom-bar action, whether it currently reads Next or Skip.
    NextClicked,

    /// Loader thread finished reading the consent ledger.
    StatusLoaded {
        contacts: PermissionStatus,
        notifications: PermissionStatus,
        notifications_visible: bool,
    },
    /// A permission request resolved.
    RequestResolved {
        permission: Permission,
        status: PermissionStatus,
    },
}

impl Intent for PermissionsIntent {}
