use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::permissions::{Permission, PermissionRuntime};
use crate::strings::Strings;
use crate::ui::app::{App, SharedRuntime};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::permissions::PermissionsIntent;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the onboarding permissions screen until the user proceeds, skips,
/// or quits. Returns true when the screen ended through the bar action.
pub fn run(
    config: &Config,
    strings: Strings,
    runtime: Box<dyn PermissionRuntime>,
) -> io::Result<bool> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let runtime: SharedRuntime = Arc::new(Mutex::new(runtime));
    let mut app = App::new(
        strings,
        Arc::clone(&runtime),
        tick_rate,
        config.ui.content_max_width,
    );
    let events = EventHandler::new(tick_rate);
    spawn_status_loader(runtime, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw reads the new frame size from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StatusLoaded {
                contacts,
                notifications,
                notifications_visible,
            }) => app.dispatch(PermissionsIntent::StatusLoaded {
                contacts,
                notifications,
                notifications_visible,
            }),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(app.is_completed())
}

/// Read the recorded statuses off the UI thread and deliver them as one
/// event. The screen shows the (delayed) loading indicator until this
/// lands.
fn spawn_status_loader(runtime: SharedRuntime, tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let (contacts, notifications, notifications_visible) = {
            let runtime = runtime.lock();
            (
                runtime.status(Permission::Contacts),
                runtime.status(Permission::Notifications),
                runtime.notifications_supported(),
            )
        };

        tracing::info!(
            ?contacts,
            ?notifications,
            notifications_visible,
            "permission statuses loaded"
        );
        let _ = tx.send(AppEvent::StatusLoaded {
            contacts,
            notifications,
            notifications_visible,
        });
    });
}
