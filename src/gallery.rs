// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation state.
//!
//! [`GalleryState`] is the single source of truth for the modal's navigation:
//! which item is shown in the main viewer (`selected_index`) and which
//! contiguous slice of items is rendered as thumbnails (`window_start ..
//! window_start + window_size`). Selection and window are deliberately
//! decoupled and follow different boundary policies:
//!
//! - the selection **wraps** circularly (there is always a next/previous item
//!   in carousel semantics);
//! - the window **saturates** at its edges (the thumbnail strip has a
//!   definite start and end).
//!
//! Derived display values ([`visible_slice`](GalleryState::visible_slice),
//! [`progress_ratio`](GalleryState::progress_ratio)) are recomputed on read
//! from the minimal stored state; nothing is cached.

use crate::domain::media::MediaItem;
use crate::domain::newtypes::WindowSize;
use crate::error::{Error, Result};

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the gallery.
    Forward,
    /// Toward the start of the gallery.
    Backward,
}

/// Navigation state for one open gallery modal.
///
/// Constructed once per modal-open event and discarded on close; reopening
/// starts over at `selected_index = 0`, `window_start = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    /// Media items in display order. Non-empty.
    items: Vec<MediaItem>,
    /// Index of the item shown in the main viewer. Always `< items.len()`.
    selected_index: usize,
    /// First item of the thumbnail window. Always `<= max_window_start()`.
    window_start: usize,
    /// Number of thumbnail slots, fixed at construction.
    window_size: WindowSize,
}

impl GalleryState {
    /// Creates a gallery with the default window size.
    ///
    /// Returns [`Error::EmptyGallery`] for an empty item list: the component
    /// refuses to initialize rather than operate on a broken invariant.
    pub fn new(items: Vec<MediaItem>) -> Result<Self> {
        Self::with_window_size(items, WindowSize::default())
    }

    /// Creates a gallery with an explicit window size.
    pub fn with_window_size(items: Vec<MediaItem>, window_size: WindowSize) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self {
            items,
            selected_index: 0,
            window_start: 0,
            window_size,
        })
    }

    /// Selects the item at `index` for the main viewer.
    ///
    /// Returns [`Error::OutOfRange`] for indices outside `[0, len)`; the
    /// argument is never clamped. Reselecting the current index changes
    /// nothing. The window does not move: selection and window scrolling are
    /// decoupled.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.selected_index = index;
        Ok(())
    }

    /// Moves the selection one step, wrapping circularly at both ends.
    ///
    /// Total for any non-empty gallery; a single-item gallery wraps onto
    /// itself.
    pub fn advance_selection(&mut self, direction: Direction) {
        let len = self.items.len();
        self.selected_index = match direction {
            Direction::Forward => (self.selected_index + 1) % len,
            Direction::Backward => (self.selected_index + len - 1) % len,
        };
        log::trace!(
            "selection advanced {:?} to {}",
            direction,
            self.selected_index
        );
    }

    /// Moves the thumbnail window one step, saturating at the strip's edges.
    ///
    /// Calls at an edge are normal no-ops, not errors. When the whole gallery
    /// fits in the window this never moves.
    pub fn advance_window(&mut self, direction: Direction) {
        self.window_start = match direction {
            Direction::Forward => (self.window_start + 1).min(self.max_window_start()),
            Direction::Backward => self.window_start.saturating_sub(1),
        };
    }

    /// The items currently rendered as thumbnails.
    ///
    /// Length is `min(window_size, len - window_start)`; recomputed from the
    /// stored indices on every call.
    #[must_use]
    pub fn visible_slice(&self) -> &[MediaItem] {
        let end = (self.window_start + self.window_size.value()).min(self.items.len());
        &self.items[self.window_start..end]
    }

    /// Scroll progress of the thumbnail window in `[0, 1]`.
    ///
    /// 0 at the start of the strip, 1 at the end. The denominator is floored
    /// to 1 so the ratio stays defined when the whole gallery fits in view
    /// (it is then constantly 0).
    #[must_use]
    pub fn progress_ratio(&self) -> f32 {
        self.window_start as f32 / self.max_window_start().max(1) as f32
    }

    /// Index of the item shown in the main viewer.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The item shown in the main viewer.
    #[must_use]
    pub fn selected_item(&self) -> &MediaItem {
        &self.items[self.selected_index]
    }

    /// First index of the thumbnail window.
    #[must_use]
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Number of thumbnail slots.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size.value()
    }

    /// Total number of media items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty galleries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the thumbnail strip has anything to scroll.
    ///
    /// False when the whole gallery already fits in the window; window-scroll
    /// intents are suppressed in that case.
    #[must_use]
    pub fn is_window_scrollable(&self) -> bool {
        self.items.len() > self.window_size.value()
    }

    /// Highest window start reachable by scrolling.
    fn max_window_start(&self) -> usize {
        self.items.len().saturating_sub(self.window_size.value())
    }
}
