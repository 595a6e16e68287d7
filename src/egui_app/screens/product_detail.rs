//! Product page: gallery, quantity and purchase actions.

use crate::egui_app::effects::{Effect, Notice, PendingAction};
use crate::shared::catalog::{generate_product, sample_product, ProductDetails};

#[derive(Debug, Clone)]
pub struct ProductDetailScreen {
    details: ProductDetails,
    quantity: u32,
    image_index: usize,
}

impl ProductDetailScreen {
    /// Unknown ids show the sample product
    pub fn new(id: u32) -> Self {
        let product = generate_product(id).unwrap_or_else(|| {
            tracing::debug!(id, "Unknown product id, showing sample product");
            sample_product()
        });
        Self {
            details: ProductDetails::from_product(product),
            quantity: 1,
            image_index: 0,
        }
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never goes below one
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.details.images.get(self.image_index).map(String::as_str)
    }

    pub fn select_image(&mut self, index: usize) {
        if index < self.details.images.len() {
            self.image_index = index;
        }
    }

    pub fn add_to_cart(&self) -> Vec<Effect> {
        vec![Effect::alert(
            "Added to Cart",
            format!(
                "{} (Qty: {}) has been added to your cart.",
                self.details.product.name, self.quantity
            ),
        )]
    }

    pub fn buy_now(&self) -> Vec<Effect> {
        vec![Effect::Notify(Notice::confirm(
            "Purchase",
            format!("Proceed to checkout for {}?", self.details.product.name),
            "Proceed",
            PendingAction::Checkout,
        ))]
    }

    pub fn contact_seller(&self) -> Vec<Effect> {
        vec![Effect::Notify(Notice::confirm(
            "Contact Seller",
            format!("Contact {} about this product?", self.details.seller.name),
            "Contact",
            PendingAction::ContactSeller,
        ))]
    }

    /// Checkout and seller contact have no backend; confirming only logs
    pub fn confirm(&mut self, action: PendingAction) -> Vec<Effect> {
        let product = self.details.product.id;
        match action {
            PendingAction::Checkout => {
                tracing::info!(product, quantity = self.quantity, "Proceeding to checkout")
            }
            PendingAction::ContactSeller => {
                tracing::info!(product, seller = %self.details.seller.name, "Contacting seller")
            }
            PendingAction::Logout => {}
        }
        Vec::new()
    }
}
