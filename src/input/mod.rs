// SPDX-License-Identifier: MPL-2.0
//! Input normalization layer.
//!
//! Raw platform events (wheel deltas, touch gestures, thumbnail clicks,
//! viewport resizes) arrive as [`Message`]s and leave as discrete [`Intent`]s
//! for the gallery state machine. The adapter filters noise: wheel deltas are
//! accumulated and debounced, swipes must clear a distance threshold, and one
//! continuous gesture emits at most one intent.

pub mod adapter;
pub mod orientation;

pub use adapter::{Effect, InputAdapter, Intent, Message};
pub use orientation::{Axis, Gesture, GestureTarget, Orientation};
