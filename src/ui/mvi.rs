//! Model-View-Intent primitives for the onboarding UI.
//!
//! The screen is a pure function of an immutable state snapshot; user
//! actions and runtime results flow back as intents, and a reducer is the
//! only place a new snapshot is produced.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (asking the permission runtime, ending the screen) happen
//! outside the reducer, in the app loop, and feed their results back in as
//! further intents.

/// Marker trait for state snapshots.
///
/// A snapshot is replaced wholesale on every transition; the view never
/// mutates it and holds no copy across frames.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and runtime results.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
