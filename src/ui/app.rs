use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::permissions::{Permission, PermissionRuntime};
use crate::strings::Strings;
use crate::ui::animation::{AnimatedValue, DelayedSpinner};
use crate::ui::bottom_bar::MAX_ELEVATION;
use crate::ui::mvi::Reducer;
use crate::ui::permissions::{PermissionsIntent, PermissionsReducer, PermissionsState};
use crate::ui::scroll::ScrollState;

/// The permission runtime, shared with the loader thread.
pub type SharedRuntime = Arc<Mutex<Box<dyn PermissionRuntime>>>;

/// Elevation units per second: a full transition in ~250 ms.
const ELEVATION_RATE: f32 = 32.0;
/// Cross-fade positions per second: a full fade in ~250 ms.
const CROSSFADE_RATE: f32 = 4.0;

/// Screen state and the clocks that animate it.
///
/// The permission snapshot is only ever replaced through the reducer; the
/// scroll cell and the animation values are the screen's own state and
/// live exactly as long as it does.
pub struct App {
    state: PermissionsState,
    scroll: ScrollState,
    elevation: AnimatedValue,
    crossfade: AnimatedValue,
    spinner: DelayedSpinner,
    strings: Strings,
    runtime: SharedRuntime,
    tick_rate: Duration,
    content_max_width: u16,
    should_quit: bool,
    completed: bool,
}

impl App {
    pub fn new(
        strings: Strings,
        runtime: SharedRuntime,
        tick_rate: Duration,
        content_max_width: u16,
    ) -> Self {
        Self {
            state: PermissionsState::default(),
            scroll: ScrollState::default(),
            elevation: AnimatedValue::new(0.0, ELEVATION_RATE),
            crossfade: AnimatedValue::new(0.0, CROSSFADE_RATE),
            spinner: DelayedSpinner::default(),
            strings,
            runtime,
            tick_rate,
            content_max_width,
            should_quit: false,
            completed: false,
        }
    }

    pub fn state(&self) -> &PermissionsState {
        &self.state
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn spinner(&self) -> &DelayedSpinner {
        &self.spinner
    }

    pub fn elevation(&self) -> f32 {
        self.elevation.value()
    }

    pub fn crossfade(&self) -> f32 {
        self.crossfade.value()
    }

    pub fn content_max_width(&self) -> u16 {
        self.content_max_width
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Quit without finishing onboarding.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the screen ended through the bar action rather than a quit.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Run an intent through the reducer, performing its side effects
    /// first. Results of those effects come back as further intents.
    pub fn dispatch(&mut self, intent: PermissionsIntent) {
        match intent {
            PermissionsIntent::AllowContactsPermissionClicked => {
                self.request_permission(Permission::Contacts);
            }
            PermissionsIntent::AllowNotificationsPermissionClicked => {
                self.request_permission(Permission::Notifications);
            }
            PermissionsIntent::NextClicked => {
                self.completed = true;
                self.should_quit = true;
            }
            _ => {}
        }

        self.state = PermissionsReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn request_permission(&mut self, permission: Permission) {
        let result = self.runtime.lock().request(permission);
        match result {
            Ok(status) => {
                self.dispatch(PermissionsIntent::RequestResolved { permission, status });
            }
            Err(err) => {
                // Leave the snapshot untouched; the card keeps its Allow
                // action and the user can try again.
                tracing::error!(permission = permission.key(), %err, "permission request failed");
            }
        }
    }

    /// Advance the animation clocks by one tick. Targets are re-derived
    /// from the current snapshot and scroll position every tick, so a
    /// change mid-animation simply retargets the running value.
    pub fn on_tick(&mut self) {
        let dt = self.tick_rate;

        if self.state.is_loading {
            self.spinner.advance(dt);
        } else {
            self.spinner.reset();
        }

        self.elevation.retarget(if self.scroll.can_scroll_forward() {
            MAX_ELEVATION
        } else {
            0.0
        });
        self.elevation.advance(dt);

        self.crossfade
            .retarget(if self.state.next_visible { 1.0 } else { 0.0 });
        self.crossfade.advance(dt);
    }
}
