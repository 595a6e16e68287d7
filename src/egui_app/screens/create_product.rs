use crate::egui_app::effects::Effect;
use crate::shared::validation::{validate_product_form, Field, FieldErrors, ProductDraft};

/// "Add product" form. Nothing is sent anywhere; a valid form is
/// acknowledged and cleared.
#[derive(Debug, Clone, Default)]
pub struct CreateProductScreen {
    pub draft: ProductDraft,
    errors: FieldErrors,
}

impl CreateProductScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touch(&mut self, field: Field) {
        self.errors.clear(field);
    }

    /// Record the location of the chosen image
    pub fn set_image(&mut self, location: impl Into<String>) {
        let location = location.into();
        self.draft.image = (!location.trim().is_empty()).then_some(location);
        self.errors.clear(Field::Image);
    }

    pub fn submit(&mut self) -> Vec<Effect> {
        self.errors = validate_product_form(&self.draft);
        if !self.errors.is_empty() {
            return Vec::new();
        }
        tracing::info!(
            product = %self.draft.product_name,
            price = %self.draft.price,
            unit = %self.draft.unit,
            quantity = %self.draft.quantity,
            "Product created"
        );
        self.draft = ProductDraft::default();
        vec![Effect::alert("Success", "Product created successfully!")]
    }
}
