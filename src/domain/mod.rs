// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure data types with no presentation dependencies.
//!
//! # Modules
//!
//! - [`media`]: media item types ([`MediaKind`](media::MediaKind),
//!   [`MediaItem`](media::MediaItem))
//! - [`newtypes`]: value objects ([`WindowSize`](newtypes::WindowSize))
//! - [`product`]: the product record supplied by the data collaborator
//!   ([`Product`](product::Product))

pub mod media;
pub mod newtypes;
pub mod product;
