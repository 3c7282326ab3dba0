// SPDX-License-Identifier: MPL-2.0
//! `gallery_modal` is the headless navigation core for a product media
//! gallery modal: a main viewer plus a windowed thumbnail strip.
//!
//! The crate owns the gallery state machine ([`GalleryState`]), the input
//! normalization layer ([`input::InputAdapter`]), and the modal lifecycle
//! around them ([`modal::State`]). It renders nothing: a presentation layer
//! reads [`GalleryState::visible_slice`], [`GalleryState::selected_index`],
//! and [`GalleryState::progress_ratio`] each frame and forwards raw wheel,
//! touch, and click events as [`input::Message`]s.

#![doc(html_root_url = "https://docs.rs/gallery_modal/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod input;
pub mod modal;

pub use config::Config;
pub use domain::media::{MediaItem, MediaKind};
pub use domain::product::Product;
pub use error::{Error, Result};
pub use gallery::{Direction, GalleryState};
pub use input::{InputAdapter, Intent};
