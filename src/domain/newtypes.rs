// SPDX-License-Identifier: MPL-2.0
//! Domain newtypes.
//!
//! Type-safe wrappers for gallery values, ensuring they are always within
//! valid ranges.

// =============================================================================
// Window Size Bounds
// =============================================================================

/// Thumbnail window size bounds.
pub mod window_bounds {
    /// Minimum number of thumbnail slots.
    pub const MIN: usize = 1;
    /// Default number of thumbnail slots.
    pub const DEFAULT: usize = 3;
}

// =============================================================================
// WindowSize
// =============================================================================

/// Number of thumbnail slots visible at once, guaranteed to be at least 1.
///
/// This type keeps the `window_size >= 1` invariant at the type level,
/// eliminating the need for manual validation at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize(usize);

impl WindowSize {
    /// Creates a new window size, raising the value to the minimum if needed.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self(slots.max(window_bounds::MIN))
    }

    /// Returns the raw slot count.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns whether this is the minimum window size.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= window_bounds::MIN
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(window_bounds::DEFAULT)
    }
}
