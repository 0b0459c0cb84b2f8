//! Tick-driven animation primitives.
//!
//! Animations advance on the render loop's tick events and never block.
//! Retargeting mid-flight just replaces the goal; the value keeps moving
//! from wherever it currently is.

use std::time::Duration;

/// Spinner frames for the loading indicator.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// How long the loading state must last before the spinner shows.
/// Fast loads come and go without any flicker.
pub const SPINNER_DELAY: Duration = Duration::from_millis(500);

/// A value that moves toward a target at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
    /// Units per second.
    rate: f32,
}

impl AnimatedValue {
    pub fn new(initial: f32, rate: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            rate,
        }
    }

    /// Replace the goal. Supersedes any previous target; no cancellation
    /// needed.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance toward the target by one tick.
    pub fn advance(&mut self, dt: Duration) {
        let step = self.rate * dt.as_secs_f32();
        let delta = self.target - self.current;
        if delta.abs() <= step {
            self.current = self.target;
        } else {
            self.current += step * delta.signum();
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// Delayed spinner for the loading state.
///
/// Invisible until the loading state has lasted [`SPINNER_DELAY`]; after
/// that the frame index advances every tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DelayedSpinner {
    elapsed: Duration,
    frame: usize,
}

impl DelayedSpinner {
    /// Advance while loading is in progress.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.is_visible() {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    /// Loading ended; a later loading phase starts the delay over.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.frame = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.elapsed >= SPINNER_DELAY
    }

    /// Current frame glyph.
    pub fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }
}
