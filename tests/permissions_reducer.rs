mod common;

use mailstart::permissions::{Permission, PermissionStatus};
use mailstart::ui::mvi::Reducer;
use mailstart::ui::permissions::{PermissionsIntent, PermissionsReducer, PermissionsState};

fn loaded(contacts: PermissionStatus, notifications: PermissionStatus, visible: bool) -> PermissionsState {
    PermissionsReducer::reduce(
        PermissionsState::default(),
        PermissionsIntent::StatusLoaded {
            contacts,
            notifications,
            notifications_visible: visible,
        },
    )
}

#[test]
fn default_state_is_loading() {
    let state = PermissionsState::default();
    assert!(state.is_loading);
    assert!(!state.next_visible);
}

#[test]
fn status_loaded_clears_loading() {
    let state = loaded(PermissionStatus::Unknown, PermissionStatus::Unknown, true);
    assert!(!state.is_loading);
    assert!(!state.next_visible);
}

#[test]
fn next_hidden_until_all_granted() {
    let state = loaded(PermissionStatus::Granted, PermissionStatus::Unknown, true);
    assert!(!state.next_visible);

    let state = loaded(PermissionStatus::Granted, PermissionStatus::Granted, true);
    assert!(state.next_visible);
}

#[test]
fn hidden_notifications_card_does_not_gate_next() {
    let state = loaded(PermissionStatus::Granted, PermissionStatus::Unknown, false);
    assert!(state.next_visible);
}

#[test]
fn request_resolved_updates_one_permission() {
    let state = loaded(PermissionStatus::Unknown, PermissionStatus::Unknown, true);

    let state = PermissionsReducer::reduce(
        state,
        PermissionsIntent::RequestResolved {
            permission: Permission::Contacts,
            status: PermissionStatus::Granted,
        },
    );
    assert_eq!(state.contacts, PermissionStatus::Granted);
    assert_eq!(state.notifications, PermissionStatus::Unknown);
    assert!(!state.next_visible);

    let state = PermissionsReducer::reduce(
        state,
        PermissionsIntent::RequestResolved {
            permission: Permission::Notifications,
            status: PermissionStatus::Granted,
        },
    );
    assert!(state.next_visible);
}

#[test]
fn denied_result_keeps_next_hidden() {
    let state = loaded(PermissionStatus::Granted, PermissionStatus::Unknown, true);
    let state = PermissionsReducer::reduce(
        state,
        PermissionsIntent::RequestResolved {
            permission: Permission::Notifications,
            status: PermissionStatus::Denied,
        },
    );
    assert_eq!(state.notifications, PermissionStatus::Denied);
    assert!(!state.next_visible);
}

#[test]
fn user_clicks_leave_the_snapshot_unchanged() {
    let state = loaded(PermissionStatus::Granted, PermissionStatus::Denied, true);

    for intent in [
        PermissionsIntent::AllowContactsPermissionClicked,
        PermissionsIntent::AllowNotificationsPermissionClicked,
        PermissionsIntent::NextClicked,
    ] {
        let next = PermissionsReducer::reduce(state.clone(), intent);
        assert_eq!(next, state);
    }
}
