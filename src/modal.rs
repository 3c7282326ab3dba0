// SPDX-License-Identifier: MPL-2.0
//! Modal lifecycle sub-component.
//!
//! Opening the modal seeds a fresh [`GalleryState`] and [`InputAdapter`] from
//! the product's media; closing discards both, which orphans every pending
//! debounce timer. Gallery state never survives a close: reopening starts
//! over at the first item.

use crate::config::Config;
use crate::domain::product::Product;
use crate::error::Result;
use crate::gallery::GalleryState;
use crate::input::{self, InputAdapter, Intent};

/// Everything owned by one open modal instance.
#[derive(Debug, Clone)]
pub struct OpenModal {
    product: Product,
    gallery: GalleryState,
    input: InputAdapter,
    show_description: bool,
}

/// Modal sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    open: Option<OpenModal>,
}

/// Messages for the modal sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the modal for a product.
    Open(Product),
    /// Close the modal and discard its state.
    Close,
    /// Toggle the collapsible description section.
    ToggleDescription,
    /// A raw input event for the gallery.
    Input(input::Message),
}

/// Effects produced by modal transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// (Re)schedule the one-shot wheel debounce timer.
    ScheduleDebounce {
        generation: u64,
        delay: std::time::Duration,
    },
    /// The modal closed; cancel any timers scheduled on its behalf.
    CancelTimers,
}

impl State {
    /// Handle a modal message.
    ///
    /// Errors surface caller bugs immediately: opening a product without
    /// media fails with [`crate::Error::EmptyGallery`], and an input event
    /// that maps to an out-of-range selection fails with
    /// [`crate::Error::OutOfRange`]. Input
    /// events while the modal is closed are quietly dropped (stale events
    /// from a teardown race, not bugs).
    pub fn handle(&mut self, msg: Message, config: &Config) -> Result<Effect> {
        match msg {
            Message::Open(product) => {
                let gallery = GalleryState::with_window_size(
                    product.media.clone(),
                    config.window_size(),
                )?;
                log::debug!(
                    "gallery modal opened for {:?} with {} items",
                    product.name,
                    gallery.len()
                );
                self.open = Some(OpenModal {
                    product,
                    gallery,
                    input: InputAdapter::new(config),
                    show_description: false,
                });
                Ok(Effect::None)
            }
            Message::Close => {
                if let Some(open) = self.open.take() {
                    log::debug!("gallery modal closed for {:?}", open.product.name);
                    return Ok(Effect::CancelTimers);
                }
                Ok(Effect::None)
            }
            Message::ToggleDescription => {
                if let Some(open) = self.open.as_mut() {
                    open.show_description = !open.show_description;
                }
                Ok(Effect::None)
            }
            Message::Input(event) => {
                let Some(open) = self.open.as_mut() else {
                    return Ok(Effect::None);
                };
                match open.input.handle(event, &open.gallery) {
                    input::Effect::None => Ok(Effect::None),
                    input::Effect::ScheduleDebounce { generation, delay } => {
                        Ok(Effect::ScheduleDebounce { generation, delay })
                    }
                    input::Effect::Emit(intent) => {
                        Self::apply_intent(&mut open.gallery, intent)?;
                        Ok(Effect::None)
                    }
                }
            }
        }
    }

    fn apply_intent(gallery: &mut GalleryState, intent: Intent) -> Result<()> {
        match intent {
            Intent::Select(index) => gallery.select(index),
            Intent::AdvanceSelection(direction) => {
                gallery.advance_selection(direction);
                Ok(())
            }
            Intent::AdvanceWindow(direction) => {
                gallery.advance_window(direction);
                Ok(())
            }
        }
    }

    /// Whether the modal is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The gallery of the open modal, if any.
    #[must_use]
    pub fn gallery(&self) -> Option<&GalleryState> {
        self.open.as_ref().map(|open| &open.gallery)
    }

    /// The product being presented, if the modal is open.
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.open.as_ref().map(|open| &open.product)
    }

    /// Whether the description section is expanded.
    #[must_use]
    pub fn show_description(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.show_description)
    }
}
