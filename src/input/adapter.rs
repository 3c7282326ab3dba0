// SPDX-License-Identifier: MPL-2.0
//! The input adapter: raw events in, discrete intents out.
//!
//! Wheel debouncing is modeled as a cancellable delayed callback owned by the
//! host: each qualifying wheel event returns
//! [`Effect::ScheduleDebounce`] with a fresh generation number, and the host
//! schedules a one-shot timer that delivers [`Message::DebounceElapsed`] when
//! it fires. A firing whose generation is stale is inert, so cancelling the
//! previous timer is an optimization, never a correctness requirement.
//! Discarding the adapter (modal close) invalidates every outstanding
//! generation.

use crate::config::Config;
use crate::gallery::{Direction, GalleryState};
use crate::input::orientation::{Axis, Gesture, GestureTarget, Orientation};
use std::time::Duration;

/// A normalized, discrete navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Select the item at an absolute gallery index.
    Select(usize),
    /// Move the main-viewer selection one step (wrapping).
    AdvanceSelection(Direction),
    /// Scroll the thumbnail window one step (saturating).
    AdvanceWindow(Direction),
}

/// Raw events forwarded verbatim by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Wheel / trackpad scrolled; both axes reported, orientation picks one.
    WheelScrolled { delta_x: f32, delta_y: f32 },
    /// The host's debounce timer fired.
    DebounceElapsed { generation: u64 },
    /// A touch gesture started at this horizontal position.
    TouchStarted { x: f32 },
    /// The tracked touch moved to this horizontal position.
    TouchMoved { x: f32 },
    /// The touch lifted without clearing the swipe threshold.
    TouchEnded,
    /// A thumbnail at visible position `slot` was clicked.
    ThumbnailClicked { slot: usize },
    /// The viewport observer reclassified the layout.
    ViewportResized { compact: bool },
}

/// What the host must do after a message is handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Apply an intent to the gallery state.
    Emit(Intent),
    /// (Re)schedule the one-shot debounce timer; a previously scheduled
    /// timer may be cancelled or simply left to fire stale.
    ScheduleDebounce { generation: u64, delay: Duration },
}

/// Per-gesture input state.
///
/// The adapter lives exactly as long as the modal that owns it; dropping it
/// orphans all outstanding debounce generations.
#[derive(Debug, Clone)]
pub struct InputAdapter {
    wheel_threshold: f32,
    debounce_delay: Duration,
    swipe_threshold: f32,
    orientation: Orientation,
    /// Accumulated wheel delta awaiting the debounce timer.
    pending_wheel: f32,
    /// Generation of the most recently scheduled debounce timer.
    debounce_generation: u64,
    /// Starting position of the touch gesture being tracked.
    touch_origin: Option<f32>,
}

impl InputAdapter {
    /// Creates an adapter with thresholds taken from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            wheel_threshold: config.wheel_threshold_px,
            debounce_delay: Duration::from_millis(config.wheel_debounce_ms),
            swipe_threshold: config.swipe_threshold_px,
            orientation: Orientation::default(),
            pending_wheel: 0.0,
            debounce_generation: 0,
            touch_origin: None,
        }
    }

    /// Handles a raw event against the current gallery state.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, gallery: &GalleryState) -> Effect {
        match msg {
            Message::WheelScrolled { delta_x, delta_y } => {
                // Wheel always targets the window; when the whole gallery
                // fits in view there is nothing to scroll.
                if !gallery.is_window_scrollable() {
                    return Effect::None;
                }

                let delta = match self.orientation.wheel_axis() {
                    Axis::Horizontal => delta_x,
                    Axis::Vertical => delta_y,
                };
                self.pending_wheel += delta;
                self.debounce_generation += 1;
                Effect::ScheduleDebounce {
                    generation: self.debounce_generation,
                    delay: self.debounce_delay,
                }
            }
            Message::DebounceElapsed { generation } => {
                if generation != self.debounce_generation {
                    // Stale timer: a newer wheel event restarted the window.
                    return Effect::None;
                }

                let delta = self.pending_wheel;
                self.pending_wheel = 0.0;

                if delta.abs() < self.wheel_threshold || !gallery.is_window_scrollable() {
                    return Effect::None;
                }

                let direction = if delta > 0.0 {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                log::debug!("wheel settled at {delta:+}, advancing window {direction:?}");
                Effect::Emit(Intent::AdvanceWindow(direction))
            }
            Message::TouchStarted { x } => {
                self.touch_origin = Some(x);
                Effect::None
            }
            Message::TouchMoved { x } => {
                let Some(origin) = self.touch_origin else {
                    return Effect::None;
                };
                let delta = x - origin;
                if delta.abs() <= self.swipe_threshold {
                    return Effect::None;
                }

                // One continuous gesture fires at most once.
                self.touch_origin = None;

                // Content follows the finger: a leftward swipe advances.
                let direction = if delta < 0.0 {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                let intent = match self.orientation.target_for(Gesture::Swipe) {
                    GestureTarget::Selection => Intent::AdvanceSelection(direction),
                    GestureTarget::Window => {
                        if !gallery.is_window_scrollable() {
                            return Effect::None;
                        }
                        Intent::AdvanceWindow(direction)
                    }
                };
                log::debug!("swipe of {delta:+}px emits {intent:?}");
                Effect::Emit(intent)
            }
            Message::TouchEnded => {
                self.touch_origin = None;
                Effect::None
            }
            Message::ThumbnailClicked { slot } => {
                // No debouncing for discrete clicks. The gallery is the
                // range gatekeeper; the adapter maps mechanically.
                Effect::Emit(Intent::Select(gallery.window_start() + slot))
            }
            Message::ViewportResized { compact } => {
                let orientation = Orientation::from_compact(compact);
                if orientation != self.orientation {
                    // Axis semantics changed mid-gesture; drop any partial
                    // accumulation and orphan the pending timer.
                    self.orientation = orientation;
                    self.pending_wheel = 0.0;
                    self.debounce_generation += 1;
                    self.touch_origin = None;
                }
                Effect::None
            }
        }
    }

    /// Current orientation mode.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether a touch gesture is currently being tracked.
    #[must_use]
    pub fn is_tracking_touch(&self) -> bool {
        self.touch_origin.is_some()
    }
}
