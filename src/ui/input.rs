use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::permissions::{PermissionsIntent, PermissionsState};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || is_ctrl_c(key) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Up => app.scroll_mut().scroll_by(-1),
        KeyCode::Down => app.scroll_mut().scroll_by(1),
        KeyCode::PageUp => {
            let page = i32::from(app.scroll().viewport_height().max(1));
            app.scroll_mut().scroll_by(-page);
        }
        KeyCode::PageDown => {
            let page = i32::from(app.scroll().viewport_height().max(1));
            app.scroll_mut().scroll_by(page);
        }
        KeyCode::End => app.scroll_mut().scroll_to_end(),
        _ => {
            if let Some(intent) = map_key(key, app.state()) {
                app.dispatch(intent);
            }
        }
    }
}

/// Map an activation key to the intent it dispatches, given the current
/// snapshot. Cards that aren't on screen have no binding: card hotkeys do
/// nothing while loading, and the notifications hotkey does nothing when
/// the card is absent. Enter activates the bar action, Next or Skip,
/// both `NextClicked`.
pub fn map_key(key: KeyEvent, state: &PermissionsState) -> Option<PermissionsIntent> {
    match key.code {
        KeyCode::Enter => Some(PermissionsIntent::NextClicked),
        KeyCode::Char('c') if !state.is_loading => {
            Some(PermissionsIntent::AllowContactsPermissionClicked)
        }
        KeyCode::Char('n') if !state.is_loading && state.notifications_visible => {
            Some(PermissionsIntent::AllowNotificationsPermissionClicked)
        }
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
