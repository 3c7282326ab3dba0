// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data: the gallery never decodes, fetches, or
//! otherwise interprets a media source. The host resolves `source` strings
//! into whatever its rendering stack needs.

use serde::{Deserialize, Serialize};

/// Represents different kinds of media shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Static image (JPEG, PNG, WebP, etc.)
    Image,
    /// Video clip (MP4, WebM, etc.)
    Video,
}

impl MediaKind {
    /// Classifies a file extension into a media kind.
    ///
    /// Returns `None` for unrecognized extensions; callers decide whether to
    /// fall back to [`MediaKind::Image`] or reject the item.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" | "gif" | "bmp" | "avif" => Some(Self::Image),
            "mp4" | "webm" | "mov" | "mkv" => Some(Self::Video),
            _ => None,
        }
    }
}

/// A single entry in the product's media gallery.
///
/// Immutable once constructed; insertion order in the owning collection is
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Kind of media this entry refers to.
    pub kind: MediaKind,
    /// Opaque source locator (URL or path); resolved by the host.
    pub source: String,
}

impl MediaItem {
    /// Creates an image item.
    #[must_use]
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            source: source.into(),
        }
    }

    /// Creates a video item.
    #[must_use]
    pub fn video(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            source: source.into(),
        }
    }

    /// Whether this item is a video.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
