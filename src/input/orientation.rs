// SPDX-License-Identifier: MPL-2.0
//! Orientation mode and the gesture mapping table.
//!
//! The host's viewport observer classifies the layout as wide (thumbnail
//! strip beside the viewer, vertical) or compact (strip below the viewer,
//! horizontal) and reports it on every resize. Orientation only decides
//! which physical axis a wheel event is read from and which semantic target
//! (window vs. selection) a gesture drives; the table below is the complete
//! mapping.
//!
//! | orientation | wheel axis | wheel target | swipe target |
//! |-------------|------------|--------------|--------------|
//! | `Wide`      | vertical   | window       | selection    |
//! | `Compact`   | horizontal | window       | window       |

/// Layout classification supplied by the host on each resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Large-screen layout: vertical thumbnail strip next to the viewer.
    #[default]
    Wide,
    /// Small-screen layout: horizontal thumbnail strip, swipeable viewer.
    Compact,
}

/// Physical scroll axis a wheel event is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Kind of continuous gesture being mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Wheel / trackpad scrolling over the thumbnail strip.
    Wheel,
    /// Touch swipe.
    Swipe,
}

/// Semantic target a gesture drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTarget {
    /// Scroll the thumbnail window (saturating).
    Window,
    /// Move the main-viewer selection (wrapping).
    Selection,
}

impl Orientation {
    /// Converts the host's viewport-classification flag.
    #[must_use]
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Axis a wheel event is read from in this orientation.
    #[must_use]
    pub fn wheel_axis(self) -> Axis {
        match self {
            Self::Wide => Axis::Vertical,
            Self::Compact => Axis::Horizontal,
        }
    }

    /// Semantic target for a gesture in this orientation.
    #[must_use]
    pub fn target_for(self, gesture: Gesture) -> GestureTarget {
        match (self, gesture) {
            (Self::Wide, Gesture::Wheel) => GestureTarget::Window,
            (Self::Wide, Gesture::Swipe) => GestureTarget::Selection,
            (Self::Compact, Gesture::Wheel) => GestureTarget::Window,
            (Self::Compact, Gesture::Swipe) => GestureTarget::Window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_compact_flag() {
        assert_eq!(Orientation::from_compact(false), Orientation::Wide);
        assert_eq!(Orientation::from_compact(true), Orientation::Compact);
    }

    #[test]
    fn wide_reads_vertical_wheel_deltas() {
        assert_eq!(Orientation::Wide.wheel_axis(), Axis::Vertical);
    }

    #[test]
    fn compact_reads_horizontal_wheel_deltas() {
        assert_eq!(Orientation::Compact.wheel_axis(), Axis::Horizontal);
    }

    #[test]
    fn mapping_table_is_exhaustive() {
        assert_eq!(
            Orientation::Wide.target_for(Gesture::Wheel),
            GestureTarget::Window
        );
        assert_eq!(
            Orientation::Wide.target_for(Gesture::Swipe),
            GestureTarget::Selection
        );
        assert_eq!(
            Orientation::Compact.target_for(Gesture::Wheel),
            GestureTarget::Window
        );
        assert_eq!(
            Orientation::Compact.target_for(Gesture::Swipe),
            GestureTarget::Window
        );
    }

    #[test]
    fn default_orientation_is_wide() {
        assert_eq!(Orientation::default(), Orientation::Wide);
    }
}
