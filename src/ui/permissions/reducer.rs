use crate::permissions::Permission;
use crate::ui::mvi::Reducer;
use crate::ui::permissions::intent::PermissionsIntent;
use crate::ui::permissions::state::PermissionsState;

pub struct PermissionsReducer;

impl Reducer for PermissionsReducer {
    type State = PermissionsState;
    type Intent = PermissionsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PermissionsIntent::StatusLoaded {
                contacts,
                notifications,
                notifications_visible,
            } => {
                let mut next = PermissionsState {
                    is_loading: false,
                    contacts,
                    notifications,
                    notifications_visible,
                    next_visible: false,
                };
                next.next_visible = next.all_granted();
                next
            }

            PermissionsIntent::RequestResolved { permission, status } => {
                let mut next = state;
                match permission {
                    Permission::Contacts => next.contacts = status,
                    Permission::Notifications => next.notifications = status,
                }
                next.next_visible = next.all_granted();
                next
            }

            // User clicks carry no state of their own; their effects (the
            // runtime request, ending the screen) run in the app loop and
            // come back as RequestResolved.
            PermissionsIntent::AllowContactsPermissionClicked
            | PermissionsIntent::AllowNotificationsPermissionClicked
            | PermissionsIntent::NextClicked => state,
        }
    }
}
