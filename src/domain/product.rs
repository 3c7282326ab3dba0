// SPDX-License-Identifier: MPL-2.0
//! The product record supplied by the data collaborator.

use crate::domain::media::MediaItem;
use serde::{Deserialize, Serialize};

/// A product as handed over by the shop backend: descriptive text, a price,
/// and the ordered media gallery shown in the modal.
///
/// The price is carried in cents to avoid floating-point money; use
/// [`Product::display_price`] for the `$X.YZ` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub price_cents: u64,
    pub description: String,
    pub media: Vec<MediaItem>,
}

impl Product {
    /// Formats the price as a dollar string with two decimals.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Whether the product carries any media at all.
    ///
    /// A product without media cannot open a gallery modal.
    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaKind;

    fn sample_product() -> Product {
        Product {
            name: "Floral Flower Dress".to_string(),
            brand: "Antisia".to_string(),
            price_cents: 900,
            description: "A beautiful floral dress perfect for summer days.".to_string(),
            media: vec![
                MediaItem::image("dress-1.png"),
                MediaItem::image("dress-2.png"),
                MediaItem::video("dress.mp4"),
            ],
        }
    }

    #[test]
    fn display_price_pads_cents() {
        let mut product = sample_product();
        assert_eq!(product.display_price(), "$9.00");

        product.price_cents = 1234;
        assert_eq!(product.display_price(), "$12.34");

        product.price_cents = 5;
        assert_eq!(product.display_price(), "$0.05");
    }

    #[test]
    fn has_media_reflects_gallery_content() {
        let mut product = sample_product();
        assert!(product.has_media());

        product.media.clear();
        assert!(!product.has_media());
    }

    #[test]
    fn serde_round_trip_preserves_media_order() {
        let product = sample_product();
        let toml = toml::to_string(&product).expect("serialize");
        let back: Product = toml::from_str(&toml).expect("deserialize");

        assert_eq!(back, product);
        assert_eq!(back.media[2].kind, MediaKind::Video);
    }
}
